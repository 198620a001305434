use std::time::Duration;

use pantry_client::domain::ingredient::{NewIngredient, UpdateIngredient};
use pantry_client::domain::recipe::{NewRecipe, RecipeIngredient};
use pantry_client::domain::types::{IngredientId, RecipeId};
use pantry_client::repository::errors::RepositoryError;
use pantry_client::repository::{
    HttpRepository, IngredientReader, IngredientWriter, RecipeReader, RecipeWriter,
    RecommendationReader,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repository(server: &MockServer) -> HttpRepository {
    HttpRepository::new(&server.uri(), Duration::from_secs(5)).expect("valid base url")
}

#[tokio::test]
async fn test_lists_ingredients() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ingredient"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Id": 1, "Name": "onion", "MeasureType": "unit", "Quantity": 10},
            {"Id": 2, "Name": "garlic", "MeasureType": "unit", "Quantity": 2}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let ingredients = repository(&server).list_ingredients().await.unwrap();

    assert_eq!(ingredients.len(), 2);
    assert_eq!(ingredients[1].name, "garlic");
}

#[tokio::test]
async fn test_null_listing_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ingredient"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let ingredients = repository(&server).list_ingredients().await.unwrap();

    assert!(ingredients.is_empty());
}

#[tokio::test]
async fn test_creates_ingredient_with_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ingredient"))
        .and(body_json(json!({"name": "onion", "measureType": "unit", "quantity": 10})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    repository(&server)
        .create_ingredient(&NewIngredient::new("onion", "unit", 10))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_updates_ingredient_by_path_id() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/ingredient/4"))
        .and(body_json(json!({"name": "salt", "measureType": "g", "quantity": 5})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    repository(&server)
        .update_ingredient(IngredientId::new(4), &UpdateIngredient::new("salt", "g", 5))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_deletes_by_query_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/ingredient"))
        .and(query_param("id", "3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/recipe"))
        .and(query_param("id", "9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let repo = repository(&server);
    repo.delete_ingredient(IngredientId::new(3)).await.unwrap();
    repo.delete_recipe(RecipeId::new(9)).await.unwrap();
}

#[tokio::test]
async fn test_creates_recipe_with_pascal_case_ingredients() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recipe"))
        .and(body_json(json!({
            "name": "Omelette",
            "ingredients": [{"Name": "egg", "Quantity": 2, "MeasureType": "unit"}]
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    repository(&server)
        .create_recipe(&NewRecipe::new(
            "Omelette",
            vec![RecipeIngredient::new("egg", 2, "unit")],
        ))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_recipe_listing_message_is_a_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipe"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "No recipes have been found"})),
        )
        .mount(&server)
        .await;

    let err = repository(&server).list_recipes().await.unwrap_err();

    assert!(matches!(err, RepositoryError::Server(m) if m == "No recipes have been found"));
}

#[tokio::test]
async fn test_error_status_carries_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recipe"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid request body"})),
        )
        .mount(&server)
        .await;

    let err = repository(&server)
        .create_recipe(&NewRecipe::new(
            "Omelette",
            vec![RecipeIngredient::new("egg", 2, "unit")],
        ))
        .await
        .unwrap_err();

    match err {
        RepositoryError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid request body");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_endpoint_is_not_found() {
    let server = MockServer::start().await;

    let err = repository(&server).list_recommendations().await.unwrap_err();

    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
async fn test_lists_recommendations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recommendation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Recommendation": 1, "Recipe": {"Id": 1, "Name": "Soup", "Ingredients": [
                {"Name": "onion", "Quantity": 1, "MeasureType": "unit"}
            ]}}
        ])))
        .mount(&server)
        .await;

    let recommendations = repository(&server).list_recommendations().await.unwrap();

    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].recipe.ingredients[0].name, "onion");
    assert_eq!(recommendations[0].rank, 1);
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    let repo = HttpRepository::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

    let err = repo.list_recipes().await.unwrap_err();

    assert!(matches!(err, RepositoryError::Transport(_)));
}
