mod common;

use serde_json::json;
use smart_city_admin::{
    notify::ToastLevel,
    views::{
        listing::ListingScreen,
        modal::{FormModal, ModalMode, SubmitOutcome},
        resources::Vendors,
    },
};

// Create a vendor with no phone: one POST with the exact body, one re-fetch, modal closed.
#[tokio::test]
async fn creating_a_vendor_posts_and_refreshes() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend.reply("GET", "/vendors", 200, json!([]));

    let mut listing = ListingScreen::new(Vendors);
    listing.refresh(&h.state.api).await;
    assert_eq!(listing.rows().len(), 0);

    let mut modal = FormModal::new(&Vendors);
    modal.open_create();
    modal.values_mut().set_text("name", "Acme Co");

    h.backend.reply(
        "GET",
        "/vendors",
        200,
        json!([{ "_id": "v1", "name": "Acme Co", "contactInfo": "" }]),
    );
    let outcome = modal.submit(&h.state, &mut listing).await;

    assert_eq!(outcome, SubmitOutcome::Saved);
    let posts = h.backend.calls("POST", "/vendors");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].body, json!({ "name": "Acme Co", "contactInfo": "" }));
    assert_eq!(h.backend.count("GET", "/vendors"), 2);
    assert_eq!(listing.rows().len(), 1);
    assert!(!modal.is_open());
    assert_eq!(h.last_toast(), "Vendor created successfully.");
    Ok(())
}

#[tokio::test]
async fn missing_name_sends_nothing() -> anyhow::Result<()> {
    let h = common::harness().await?;
    let mut listing = ListingScreen::new(Vendors);
    let mut modal = FormModal::new(&Vendors);
    modal.open_create();
    modal.values_mut().set_text("contactInfo", "0300 1234567");

    let outcome = modal.submit(&h.state, &mut listing).await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(modal.errors().get("name"), Some("Vendor name is required"));
    assert!(h.backend.requests().is_empty());
    assert!(modal.is_open());
    Ok(())
}

#[tokio::test]
async fn server_error_keeps_the_modal_open() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend
        .reply("POST", "/vendors", 500, json!({ "message": "duplicate vendor" }));

    let mut listing = ListingScreen::new(Vendors);
    let mut modal = FormModal::new(&Vendors);
    modal.open_create();
    modal.values_mut().set_text("name", "Acme Co");

    let outcome = modal.submit(&h.state, &mut listing).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(modal.is_open());
    assert!(!modal.is_submitting());
    let toast = h.toasts.last().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, "Error creating vendor");
    assert_eq!(h.backend.count("GET", "/vendors"), 0);
    Ok(())
}

#[tokio::test]
async fn updating_a_vendor_puts_to_its_id() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend.reply(
        "GET",
        "/vendors",
        200,
        json!([{ "_id": "v1", "name": "Acme Co", "contactInfo": 5551234 }]),
    );

    let mut listing = ListingScreen::new(Vendors);
    listing.refresh(&h.state.api).await;
    let record = listing.find("v1").cloned().unwrap();

    let mut modal = FormModal::new(&Vendors);
    modal.open_update(&Vendors, &record);
    assert_eq!(modal.mode(), Some(&ModalMode::Update("v1".into())));
    assert_eq!(modal.values().text("contactInfo"), "5551234");
    modal.values_mut().set_text("name", "Acme Supplies");

    let outcome = modal.submit(&h.state, &mut listing).await;

    assert_eq!(outcome, SubmitOutcome::Saved);
    let puts = h.backend.calls("PUT", "/vendors/v1");
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].body, json!({ "name": "Acme Supplies", "contactInfo": "5551234" }));
    assert_eq!(h.last_toast(), "Vendor updated successfully.");
    Ok(())
}

#[tokio::test]
async fn failed_fetch_empties_the_table() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend.reply(
        "GET",
        "/vendors",
        200,
        json!([{ "_id": "v1", "name": "Acme Co" }, { "_id": "v2", "name": "Bolt" }]),
    );
    let mut listing = ListingScreen::new(Vendors);
    listing.refresh(&h.state.api).await;
    assert_eq!(listing.rows().len(), 2);
    assert_eq!(listing.search("bolt").len(), 1);

    h.backend
        .reply("GET", "/vendors", 503, json!({ "error": "maintenance" }));
    listing.refresh(&h.state.api).await;

    assert!(listing.records().is_empty());
    assert!(listing.last_error().is_some_and(|e| e.contains("maintenance")));
    assert!(!listing.is_loading());
    Ok(())
}

#[tokio::test]
async fn closed_listing_stops_fetching() -> anyhow::Result<()> {
    let h = common::harness().await?;
    let mut listing = ListingScreen::new(Vendors);
    listing.close();
    listing.refresh(&h.state.api).await;

    assert!(listing.is_closed());
    assert_eq!(h.backend.count("GET", "/vendors"), 0);
    Ok(())
}

#[tokio::test]
async fn patch_replaces_a_row_in_place() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend.reply(
        "GET",
        "/vendors",
        200,
        json!([{ "_id": "v1", "name": "Acme Co" }, { "_id": "v2", "name": "Bolt" }]),
    );
    let mut listing = ListingScreen::new(Vendors);
    listing.refresh(&h.state.api).await;

    let mut renamed = listing.find("v2").cloned().unwrap();
    renamed.name = "Bolt Traders".into();
    assert!(listing.patch(renamed));
    assert_eq!(listing.rows()[1].cells[0], "Bolt Traders");

    let mut stranger = listing.find("v1").cloned().unwrap();
    stranger.id = "v404".into();
    assert!(!listing.patch(stranger));
    assert_eq!(listing.records().len(), 2);
    Ok(())
}
