use food_generator::{Action, Controller, Cuisine, DishSelection, Screen, SpoonacularClient};
use mockito::Matcher;

const ITALIAN_SEARCH: &str = r#"
{
    "results": [
        {"id": 654959, "title": "Pasta With Tuna", "image": "https://img.spoonacular.com/recipes/654959-312x231.jpg", "imageType": "jpg"},
        {"id": 715538, "title": "Bruschetta Style Pork & Pasta", "image": "https://img.spoonacular.com/recipes/715538-312x231.jpg", "imageType": "jpg"},
        {"id": 511728, "title": "Pasta Margherita", "image": "https://img.spoonacular.com/recipes/511728-312x231.jpg", "imageType": "jpg"}
    ],
    "offset": 0,
    "number": 5,
    "totalResults": 263
}
"#;

const BRUSCHETTA_DETAIL: &str = r#"
{
    "id": 715538,
    "title": "Bruschetta Style Pork & Pasta",
    "image": "https://img.spoonacular.com/recipes/715538-556x370.jpg",
    "imageType": "jpg",
    "servings": 5,
    "readyInMinutes": 35,
    "cuisines": ["Mediterranean", "Italian", "European"],
    "extendedIngredients": [
        {"id": 2044, "name": "basil", "original": "1 cup fresh basil, chopped"},
        {"id": 11215, "name": "garlic", "original": "2 cloves garlic, minced"},
        {"id": 10210220, "name": "pork tenderloin", "original": "1 pound pork tenderloin"},
        {"id": 20420, "name": "pasta", "original": "8 ounces whole wheat penne"}
    ],
    "instructions": "Cook pasta according to package directions. Meanwhile, sear the pork in a hot skillet. Toss pasta with pork, basil and garlic."
}
"#;

#[tokio::test]
async fn test_italian_browse_end_to_end() {
    let _ = env_logger::try_init();
    let mut server = mockito::Server::new_async().await;

    let search = server
        .mock("GET", "/complexSearch")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apiKey".into(), "fixture-key".into()),
            Matcher::UrlEncoded("cuisine".into(), "Italian".into()),
            Matcher::UrlEncoded("number".into(), "5".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ITALIAN_SEARCH)
        .create_async()
        .await;

    let detail = server
        .mock("GET", "/715538/information")
        .match_query(Matcher::UrlEncoded("apiKey".into(), "fixture-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(BRUSCHETTA_DETAIL)
        .create_async()
        .await;

    let client = SpoonacularClient::with_base_url("fixture-key".to_string(), server.url());
    let controller = Controller::new(client);

    let menu = match controller.handle(Action::ChooseCuisine(Cuisine::Italian)).await {
        Screen::Dishes(menu) => menu,
        other => panic!("Expected dish menu, got {:?}", other),
    };
    assert_eq!(menu.options.len(), 3);
    assert_eq!(menu.options[1].label, "Bruschetta Style Pork & Pasta");

    let chosen = menu.resolve(2).unwrap();
    let view = match controller.handle(Action::ChooseDish(chosen.id)).await {
        Screen::Recipe(view) => view,
        other => panic!("Expected recipe, got {:?}", other),
    };

    assert_eq!(view.title, "Bruschetta Style Pork & Pasta");
    assert_eq!(
        view.image.as_deref(),
        Some("https://img.spoonacular.com/recipes/715538-556x370.jpg")
    );
    assert_eq!(view.ready_in_minutes, 35);
    assert_eq!(
        view.ingredients,
        vec![
            "1 cup fresh basil, chopped",
            "2 cloves garlic, minced",
            "1 pound pork tenderloin",
            "8 ounces whole wheat penne"
        ]
    );
    assert_eq!(
        view.steps,
        vec![
            "Cook pasta according to package directions.",
            "Meanwhile, sear the pork in a hot skillet.",
            "Toss pasta with pork, basil and garlic."
        ]
    );

    let page = view.to_string();
    assert!(page.contains("Ready in: 35 minutes"));
    assert!(page.contains("- 8 ounces whole wheat penne"));

    search.assert_async().await;
    detail.assert_async().await;
}

#[tokio::test]
async fn test_italian_browse_selecting_dish_by_id() {
    let mut server = mockito::Server::new_async().await;
    let search = server
        .mock("GET", "/complexSearch")
        .match_query(Matcher::UrlEncoded("cuisine".into(), "Italian".into()))
        .with_status(200)
        .with_body(ITALIAN_SEARCH)
        .create_async()
        .await;
    let detail = server
        .mock("GET", "/715538/information")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(BRUSCHETTA_DETAIL)
        .create_async()
        .await;

    let controller = Controller::new(SpoonacularClient::with_base_url(
        "fixture-key".to_string(),
        server.url(),
    ));
    let menu = controller.dish_menu(Cuisine::Italian).await;

    // An id outside the current results is not selectable
    assert!(menu.select(DishSelection::Id(1)).is_none());

    let chosen = menu.select(DishSelection::Id(715538)).unwrap();
    match controller.handle(Action::ChooseDish(chosen.id)).await {
        Screen::Recipe(view) => assert_eq!(view.title, "Bruschetta Style Pork & Pasta"),
        other => panic!("Expected recipe, got {:?}", other),
    }

    search.assert_async().await;
    detail.assert_async().await;
}

#[tokio::test]
async fn test_duplicate_titles_keep_every_dish() {
    let mut server = mockito::Server::new_async().await;
    let _search = server
        .mock("GET", "/complexSearch")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"results": [
                {"id": 100, "title": "Chicken Tikka Masala"},
                {"id": 200, "title": "Chicken Tikka Masala"}
            ]}"#,
        )
        .create_async()
        .await;

    let controller = Controller::new(SpoonacularClient::with_base_url(
        "fixture-key".to_string(),
        server.url(),
    ));
    let menu = controller.dish_menu(Cuisine::Indian).await;

    let ids: Vec<u64> = menu.options.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![100, 200]);
    assert_eq!(menu.options[0].label, "Chicken Tikka Masala (#100)");
    assert_eq!(menu.options[1].label, "Chicken Tikka Masala (#200)");
}

#[tokio::test]
async fn test_search_failure_gives_empty_menu() {
    let mut server = mockito::Server::new_async().await;
    let _search = server
        .mock("GET", "/complexSearch")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"status": "failure", "code": 401, "message": "You are not authorized."}"#)
        .create_async()
        .await;

    let controller = Controller::new(SpoonacularClient::with_base_url(
        "bad-key".to_string(),
        server.url(),
    ));

    match controller.handle(Action::ChooseCuisine(Cuisine::Mexican)).await {
        Screen::Dishes(menu) => {
            assert!(menu.is_empty());
            assert_eq!(menu.to_string(), "No Mexican dishes found.\n");
        }
        other => panic!("Expected empty dish menu, got {:?}", other),
    }
}

#[tokio::test]
async fn test_detail_failure_shows_retry_notice() {
    let mut server = mockito::Server::new_async().await;
    let _detail = server
        .mock("GET", "/999/information")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let controller = Controller::new(SpoonacularClient::with_base_url(
        "fixture-key".to_string(),
        server.url(),
    ));

    assert_eq!(
        controller.handle(Action::ChooseDish(999)).await,
        Screen::Notice("Could not fetch recipe details. Try again!")
    );
}
