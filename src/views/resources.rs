use async_trait::async_trait;
use serde_json::Value;

use crate::{
    client::ApiClient,
    dto::{
        auth::UpdateUserRequest,
        orders::{UpdateFormRequest, UpdateOrderRequest},
        products::{CategoryPayload, VendorPayload},
    },
    error::{ClientError, ClientResult},
    forms::{ChoiceOptions, FieldKind, FieldSpec, FormSchema, FormValues, Rule, schemas},
    models::{Category, FormSubmission, Order, User, Vendor},
    services::{category_service, form_service, order_service, user_service, vendor_service},
};

use super::table::TableView;

/// One entity's REST surface as the generic screens see it.
#[async_trait]
pub trait CrudResource: Send + Sync {
    type Record: Clone + Send + Sync;
    type Draft: Send + Sync;

    /// Singular display name, e.g. `"Vendor"`.
    fn label(&self) -> &'static str;

    fn record_id<'a>(&self, record: &'a Self::Record) -> &'a str;

    async fn list(&self, api: &ApiClient) -> ClientResult<Vec<Self::Record>>;

    async fn create(&self, _api: &ApiClient, _draft: &Self::Draft) -> ClientResult<()> {
        Err(ClientError::Unsupported("create"))
    }

    async fn update(&self, _api: &ApiClient, _id: &str, _draft: &Self::Draft) -> ClientResult<()> {
        Err(ClientError::Unsupported("update"))
    }

    async fn delete(&self, _api: &ApiClient, _id: &str) -> ClientResult<()> {
        Err(ClientError::Unsupported("delete"))
    }
}

/// Session facts some payloads embed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormContext {
    pub profile_id: Option<String>,
}

/// Ties a resource to the form that creates and edits it.
pub trait FormBinding: CrudResource {
    fn schema(&self) -> FormSchema;

    fn prefill(&self, record: &Self::Record) -> FormValues;

    /// Called only after validation passed and images were uploaded.
    fn draft(&self, values: &FormValues, ctx: &FormContext) -> Self::Draft;

    /// Toast text after a successful create.
    fn created_message(&self, _values: &FormValues, _options: &ChoiceOptions) -> String {
        format!("{} created successfully.", self.label())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Vendors;

#[async_trait]
impl CrudResource for Vendors {
    type Record = Vendor;
    type Draft = VendorPayload;

    fn label(&self) -> &'static str {
        "Vendor"
    }

    fn record_id<'a>(&self, record: &'a Vendor) -> &'a str {
        &record.id
    }

    async fn list(&self, api: &ApiClient) -> ClientResult<Vec<Vendor>> {
        vendor_service::list_vendors(api).await
    }

    async fn create(&self, api: &ApiClient, draft: &VendorPayload) -> ClientResult<()> {
        vendor_service::create_vendor(api, draft).await.map(drop)
    }

    async fn update(&self, api: &ApiClient, id: &str, draft: &VendorPayload) -> ClientResult<()> {
        vendor_service::update_vendor(api, id, draft).await.map(drop)
    }

    async fn delete(&self, api: &ApiClient, id: &str) -> ClientResult<()> {
        vendor_service::delete_vendor(api, id).await.map(drop)
    }
}

impl FormBinding for Vendors {
    fn schema(&self) -> FormSchema {
        schemas::vendor()
    }

    fn prefill(&self, record: &Vendor) -> FormValues {
        FormValues::new()
            .with_text("name", record.name.clone())
            .with_text("contactInfo", record.contact_info.clone())
    }

    fn draft(&self, values: &FormValues, _ctx: &FormContext) -> VendorPayload {
        VendorPayload {
            name: values.text("name").trim().to_string(),
            contact_info: values.text("contactInfo").trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Categories;

#[async_trait]
impl CrudResource for Categories {
    type Record = Category;
    type Draft = CategoryPayload;

    fn label(&self) -> &'static str {
        "Category"
    }

    fn record_id<'a>(&self, record: &'a Category) -> &'a str {
        &record.id
    }

    async fn list(&self, api: &ApiClient) -> ClientResult<Vec<Category>> {
        category_service::list_categories(api).await
    }

    async fn create(&self, api: &ApiClient, draft: &CategoryPayload) -> ClientResult<()> {
        category_service::create_category(api, draft).await.map(drop)
    }

    async fn update(&self, api: &ApiClient, id: &str, draft: &CategoryPayload) -> ClientResult<()> {
        category_service::update_category(api, id, draft).await.map(drop)
    }

    async fn delete(&self, api: &ApiClient, id: &str) -> ClientResult<()> {
        category_service::delete_category(api, id).await.map(drop)
    }
}

impl FormBinding for Categories {
    fn schema(&self) -> FormSchema {
        schemas::category()
    }

    fn prefill(&self, record: &Category) -> FormValues {
        FormValues::new()
            .with_text("title", record.title.clone())
            .with_text("desc", record.description.clone())
    }

    fn draft(&self, values: &FormValues, _ctx: &FormContext) -> CategoryPayload {
        CategoryPayload {
            title: values.text("title").trim().to_string(),
            description: values.text("desc").trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Orders;

#[async_trait]
impl CrudResource for Orders {
    type Record = Order;
    type Draft = UpdateOrderRequest;

    fn label(&self) -> &'static str {
        "Order"
    }

    fn record_id<'a>(&self, record: &'a Order) -> &'a str {
        &record.id
    }

    async fn list(&self, api: &ApiClient) -> ClientResult<Vec<Order>> {
        order_service::list_orders(api).await
    }

    async fn update(&self, api: &ApiClient, id: &str, draft: &UpdateOrderRequest) -> ClientResult<()> {
        order_service::update_order(api, id, draft).await.map(drop)
    }

    async fn delete(&self, api: &ApiClient, id: &str) -> ClientResult<()> {
        order_service::delete_order(api, id).await.map(drop)
    }
}

impl FormBinding for Orders {
    fn schema(&self) -> FormSchema {
        FormSchema::new(vec![
            FieldSpec::new("status", "Status", FieldKind::Text).required("Status is required"),
        ])
    }

    fn prefill(&self, record: &Order) -> FormValues {
        FormValues::new().with_text("status", record.text("status"))
    }

    fn draft(&self, values: &FormValues, _ctx: &FormContext) -> UpdateOrderRequest {
        UpdateOrderRequest {
            status: values.text("status").trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Forms;

#[async_trait]
impl CrudResource for Forms {
    type Record = FormSubmission;
    type Draft = UpdateFormRequest;

    fn label(&self) -> &'static str {
        "Form"
    }

    fn record_id<'a>(&self, record: &'a FormSubmission) -> &'a str {
        &record.id
    }

    async fn list(&self, api: &ApiClient) -> ClientResult<Vec<FormSubmission>> {
        form_service::list_forms(api).await
    }

    async fn update(&self, api: &ApiClient, id: &str, draft: &UpdateFormRequest) -> ClientResult<()> {
        form_service::update_form(api, id, draft).await.map(drop)
    }

    async fn delete(&self, api: &ApiClient, id: &str) -> ClientResult<()> {
        form_service::delete_form(api, id).await.map(drop)
    }
}

impl FormBinding for Forms {
    fn schema(&self) -> FormSchema {
        FormSchema::new(vec![
            FieldSpec::new("name", "Name", FieldKind::Text).required("Name is required"),
            FieldSpec::new("email", "Email", FieldKind::Email)
                .rule(Rule::Email("Must be a valid email"))
                .required("Email is required"),
            FieldSpec::new("message", "Message", FieldKind::Multiline),
        ])
    }

    fn prefill(&self, record: &FormSubmission) -> FormValues {
        FormValues::new()
            .with_text("name", record.text("name"))
            .with_text("email", record.text("email"))
            .with_text("message", record.text("message"))
    }

    fn draft(&self, values: &FormValues, _ctx: &FormContext) -> UpdateFormRequest {
        let fields = ["name", "email", "message"]
            .into_iter()
            .map(|key| (key.to_string(), Value::String(values.text(key).trim().to_string())))
            .collect();
        UpdateFormRequest { fields }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Users;

#[async_trait]
impl CrudResource for Users {
    type Record = User;
    type Draft = UpdateUserRequest;

    fn label(&self) -> &'static str {
        "User"
    }

    fn record_id<'a>(&self, record: &'a User) -> &'a str {
        &record.id
    }

    async fn list(&self, api: &ApiClient) -> ClientResult<Vec<User>> {
        user_service::list_users(api).await
    }

    async fn update(&self, api: &ApiClient, id: &str, draft: &UpdateUserRequest) -> ClientResult<()> {
        user_service::update_user(api, id, draft).await.map(drop)
    }
}

impl FormBinding for Users {
    fn schema(&self) -> FormSchema {
        FormSchema::new(vec![
            FieldSpec::new("role", "Role", FieldKind::Choice).required("Role is required"),
        ])
    }

    fn prefill(&self, record: &User) -> FormValues {
        FormValues::new().with_text("role", record.role.as_str())
    }

    fn draft(&self, values: &FormValues, _ctx: &FormContext) -> UpdateUserRequest {
        UpdateUserRequest {
            role: Some(values.text("role").to_string()),
            ..UpdateUserRequest::default()
        }
    }
}

impl TableView for Vendors {
    fn columns(&self) -> &'static [&'static str] {
        &["Name", "Phone Number"]
    }

    fn cells(&self, record: &Vendor) -> Vec<String> {
        vec![record.name.clone(), record.contact_info.clone()]
    }
}

impl TableView for Categories {
    fn columns(&self) -> &'static [&'static str] {
        &["Title", "Description"]
    }

    fn cells(&self, record: &Category) -> Vec<String> {
        vec![record.title.clone(), record.description.clone()]
    }
}

impl TableView for Orders {
    fn columns(&self) -> &'static [&'static str] {
        &["Order", "Status"]
    }

    fn cells(&self, record: &Order) -> Vec<String> {
        vec![record.id.clone(), record.text("status")]
    }
}

impl TableView for Forms {
    fn columns(&self) -> &'static [&'static str] {
        &["Name", "Email", "Message"]
    }

    fn cells(&self, record: &FormSubmission) -> Vec<String> {
        vec![record.text("name"), record.text("email"), record.text("message")]
    }
}

impl TableView for Users {
    fn columns(&self) -> &'static [&'static str] {
        &["First Name", "Last Name", "Email", "Role"]
    }

    fn cells(&self, record: &User) -> Vec<String> {
        vec![
            record.firstname.clone(),
            record.lastname.clone(),
            record.email.clone(),
            record.role.as_str().to_string(),
        ]
    }
}
