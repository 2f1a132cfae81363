use mockito::Server;

use domain::value_objects::{SalesRecord, ServiceLevel};
use flows::{InventoryLevel, ReorderPlan, ReorderPlanFlow};
use llm::{LlmClient, LlmProvider};

fn client_for(server: &Server) -> LlmClient {
    LlmClient::new(
        LlmProvider::Local {
            url: server.url(),
            model: "test-model".to_string(),
        },
        1024,
        0.2,
    )
}

fn sample_inputs() -> (Vec<SalesRecord>, Vec<InventoryLevel>) {
    let sales = vec![SalesRecord {
        product_id: "p1".to_string(),
        product_name: "Filtro de Óleo MANN HU 945/2x".to_string(),
        units_sold: 42,
    }];
    let inventory = vec![InventoryLevel {
        product_id: "p1".to_string(),
        product_name: "Filtro de Óleo MANN HU 945/2x".to_string(),
        quantity_in_stock: 3,
    }];
    (sales, inventory)
}

fn openai_body(content: &str) -> String {
    let escaped = content.replace('"', "\\\"").replace('\n', "\\n");
    format!(
        r#"{{"choices": [{{"message": {{"role": "assistant", "content": "{escaped}"}}}}]}}"#
    )
}

#[tokio::test]
async fn test_well_formed_plan_is_parsed() {
    let mut server = Server::new_async().await;
    let plan = r#"{"reorderPlan": [{"productId": "p1", "productName": "Filtro de Óleo MANN HU 945/2x", "quantity": 8}], "rationale": "Sales outpace stock; reorder to hold the 95% service level."}"#;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(openai_body(plan))
        .create_async()
        .await;

    let flow = ReorderPlanFlow::new(client_for(&server));
    let (sales, inventory) = sample_inputs();

    let output = flow
        .generate(&sales, &inventory, ServiceLevel::new(95).expect("level"))
        .await
        .expect("generate");

    match output.plan {
        ReorderPlan::Items(items) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].product_id, "p1");
            assert_eq!(items[0].quantity, 8);
        }
        ReorderPlan::Raw(raw) => panic!("expected parsed plan, got raw: {raw}"),
    }
    assert!(output.rationale.contains("service level"));
}

#[tokio::test]
async fn test_freeform_plan_is_preserved_raw() {
    let mut server = Server::new_async().await;
    let plan = r#"{"reorderPlan": "Reorder 8 units of the oil filter.", "rationale": "Best effort."}"#;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(openai_body(plan))
        .create_async()
        .await;

    let flow = ReorderPlanFlow::new(client_for(&server));
    let (sales, inventory) = sample_inputs();

    let output = flow
        .generate(&sales, &inventory, ServiceLevel::default())
        .await
        .expect("generate");

    assert_eq!(
        output.plan,
        ReorderPlan::Raw("Reorder 8 units of the oil filter.".to_string())
    );
}

#[tokio::test]
async fn test_backend_failure_is_surfaced() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(503)
        .with_body("overloaded")
        .create_async()
        .await;

    let flow = ReorderPlanFlow::new(client_for(&server));
    let (sales, inventory) = sample_inputs();

    let result = flow
        .generate(&sales, &inventory, ServiceLevel::default())
        .await;
    assert!(result.is_err());
}
