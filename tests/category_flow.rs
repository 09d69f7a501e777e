mod common;

use serde_json::json;
use smart_city_admin::{
    services::category_service,
    views::{
        listing::ListingScreen,
        modal::{FormModal, SubmitOutcome},
        resources::Categories,
    },
};

// The form edits `desc`; the wire key is `description`.
#[tokio::test]
async fn creating_a_category_posts_title_and_description() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend.reply(
        "GET",
        "/all/category",
        200,
        json!([{ "_id": "c1", "title": "Medical", "description": "Clinics and pharmacies" }]),
    );

    let mut listing = ListingScreen::new(Categories);
    let mut modal = FormModal::new(&Categories);
    modal.open_create();
    modal.values_mut().set_text("title", " Medical ");
    modal.values_mut().set_text("desc", "Clinics and pharmacies");

    let outcome = modal.submit(&h.state, &mut listing).await;

    assert_eq!(outcome, SubmitOutcome::Saved);
    let posts = h.backend.calls("POST", "/category");
    assert_eq!(posts.len(), 1);
    assert_eq!(
        posts[0].body,
        json!({ "title": "Medical", "description": "Clinics and pharmacies" })
    );
    assert_eq!(h.last_toast(), "Category created successfully.");
    assert_eq!(h.backend.count("GET", "/all/category"), 1);
    assert_eq!(listing.rows()[0].cells, vec!["Medical", "Clinics and pharmacies"]);
    Ok(())
}

#[tokio::test]
async fn category_without_description_is_rejected() -> anyhow::Result<()> {
    let h = common::harness().await?;
    let mut listing = ListingScreen::new(Categories);
    let mut modal = FormModal::new(&Categories);
    modal.open_create();
    modal.values_mut().set_text("title", "Medical");

    assert_eq!(modal.submit(&h.state, &mut listing).await, SubmitOutcome::Invalid);

    assert_eq!(modal.errors().get("desc"), Some("Description is required"));
    assert!(h.backend.requests().is_empty());
    Ok(())
}

#[tokio::test]
async fn editing_a_category_prefills_desc_from_description() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend.reply(
        "GET",
        "/all/category",
        200,
        json!([{ "_id": "c1", "title": "Medical", "description": "Clinics" }]),
    );
    let mut listing = ListingScreen::new(Categories);
    listing.refresh(&h.state.api).await;
    let record = listing.find("c1").cloned().unwrap();

    let mut modal = FormModal::new(&Categories);
    modal.open_update(&Categories, &record);
    assert_eq!(modal.values().text("desc"), "Clinics");
    modal.values_mut().set_text("desc", "Clinics and pharmacies");

    assert_eq!(modal.submit(&h.state, &mut listing).await, SubmitOutcome::Saved);

    let puts = h.backend.calls("PUT", "/category/c1");
    assert_eq!(
        puts[0].body,
        json!({ "title": "Medical", "description": "Clinics and pharmacies" })
    );
    assert_eq!(h.last_toast(), "Category updated successfully.");
    Ok(())
}

#[tokio::test]
async fn single_category_is_fetched_by_id() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend.reply(
        "GET",
        "/category/c1",
        200,
        json!({ "_id": "c1", "title": "Medical", "description": "Clinics" }),
    );

    let category = category_service::get_category(&h.state.api, "c1").await?;

    assert_eq!(category.title, "Medical");
    let gets = h.backend.calls("GET", "/category/c1");
    assert_eq!(gets.len(), 1);
    assert_eq!(h.backend.requests().len(), 1);
    Ok(())
}
