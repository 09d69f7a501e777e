mod common;

use serde_json::json;
use smart_city_admin::{
    services::order_service,
    views::{
        delete::DeleteModal,
        listing::ListingScreen,
        modal::{FormModal, ModalMode, SubmitOutcome},
        resources::{Forms, Orders},
    },
};

#[tokio::test]
async fn order_status_update_puts_only_the_status() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend.reply(
        "GET",
        "/all/orders",
        200,
        json!([{ "_id": "o1", "status": "pending", "total": 120 }]),
    );
    let mut listing = ListingScreen::new(Orders);
    listing.refresh(&h.state.api).await;
    assert_eq!(listing.rows()[0].cells, vec!["o1", "pending"]);

    let record = listing.find("o1").cloned().unwrap();
    let mut modal = FormModal::new(&Orders);
    modal.open_update(&Orders, &record);
    assert_eq!(modal.mode(), Some(&ModalMode::Update("o1".into())));
    assert_eq!(modal.values().text("status"), "pending");

    h.backend.reply(
        "GET",
        "/all/orders",
        200,
        json!([{ "_id": "o1", "status": "shipped", "total": 120 }]),
    );
    modal.values_mut().set_text("status", "shipped");
    let outcome = modal.submit(&h.state, &mut listing).await;

    assert_eq!(outcome, SubmitOutcome::Saved);
    let puts = h.backend.calls("PUT", "/order/o1");
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].body, json!({ "status": "shipped" }));
    assert_eq!(h.last_toast(), "Order updated successfully.");
    assert_eq!(listing.rows()[0].cells, vec!["o1", "shipped"]);
    Ok(())
}

#[tokio::test]
async fn single_order_is_fetched_by_id() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend.reply("GET", "/order/o1", 200, json!({ "_id": "o1", "status": "pending" }));

    let order = order_service::get_order(&h.state.api, "o1").await?;

    assert_eq!(order.id, "o1");
    assert_eq!(order.text("status"), "pending");
    assert_eq!(h.backend.count("GET", "/order/o1"), 1);
    assert_eq!(h.backend.requests().len(), 1);
    Ok(())
}

fn submissions() -> serde_json::Value {
    json!([
        { "_id": "f1", "name": "Ali", "email": "ali@example.com", "message": "Broken streetlight" },
        { "_id": "f2", "name": "Hina", "email": "hina@example.com", "message": "Pothole on 5th" }
    ])
}

#[tokio::test]
async fn forms_list_and_delete() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend.reply("GET", "/all/forms", 200, submissions());

    let mut listing = ListingScreen::new(Forms);
    listing.refresh(&h.state.api).await;
    let rows = listing.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells, vec!["Ali", "ali@example.com", "Broken streetlight"]);

    h.backend.reply(
        "GET",
        "/all/forms",
        200,
        json!([{ "_id": "f2", "name": "Hina", "email": "hina@example.com", "message": "Pothole on 5th" }]),
    );
    let mut delete = DeleteModal::new();
    delete.open("f1");
    assert!(delete.confirm(&h.state, &mut listing).await);

    assert_eq!(h.backend.count("DELETE", "/form/f1"), 1);
    assert_eq!(h.last_toast(), "Form deleted successfully.");
    assert_eq!(h.backend.count("GET", "/all/forms"), 2);
    assert!(listing.find("f1").is_none());
    Ok(())
}

#[tokio::test]
async fn editing_a_form_puts_the_edited_fields() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend.reply("GET", "/all/forms", 200, submissions());
    let mut listing = ListingScreen::new(Forms);
    listing.refresh(&h.state.api).await;
    let record = listing.find("f2").cloned().unwrap();

    let mut modal = FormModal::new(&Forms);
    modal.open_update(&Forms, &record);
    modal.values_mut().set_text("message", "Pothole on 5th Avenue");

    assert_eq!(modal.submit(&h.state, &mut listing).await, SubmitOutcome::Saved);

    let puts = h.backend.calls("PUT", "/form/f2");
    assert_eq!(
        puts[0].body,
        json!({ "name": "Hina", "email": "hina@example.com", "message": "Pothole on 5th Avenue" })
    );
    assert_eq!(h.last_toast(), "Form updated successfully.");
    Ok(())
}

#[tokio::test]
async fn form_edit_checks_the_email() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend.reply("GET", "/all/forms", 200, submissions());
    let mut listing = ListingScreen::new(Forms);
    listing.refresh(&h.state.api).await;
    let record = listing.find("f1").cloned().unwrap();

    let mut modal = FormModal::new(&Forms);
    modal.open_update(&Forms, &record);
    modal.values_mut().set_text("email", "ali@");

    assert_eq!(modal.submit(&h.state, &mut listing).await, SubmitOutcome::Invalid);
    assert_eq!(modal.errors().get("email"), Some("Must be a valid email"));
    assert_eq!(h.backend.count("PUT", "/form/f1"), 0);
    Ok(())
}
