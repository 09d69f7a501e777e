use async_trait::async_trait;

use crate::{
    client::ApiClient,
    dto::directory::{HospitalPayload, InstitutePayload, MallPayload, ReviewTarget},
    error::ClientResult,
    forms::{ChoiceOptions, FormSchema, FormValues, schemas},
    maps,
    models::{Coordinates, Hospital, HospitalOther, Institute, InstituteOther, Mall, MallOther, Review},
    services::directory_service,
};

use super::{
    resources::{CrudResource, FormBinding, FormContext},
    table::TableView,
};

/// A nested list on a detail page, e.g. a hospital's doctors.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub items: Vec<String>,
    empty_caption: &'static str,
}

impl Section {
    fn new(title: &'static str, items: &[String], empty_caption: &'static str) -> Self {
        Self {
            title,
            items: items.to_vec(),
            empty_caption,
        }
    }

    /// Shown instead of the list when it is empty.
    pub fn caption(&self) -> Option<&'static str> {
        self.items.is_empty().then_some(self.empty_caption)
    }
}

/// What the detail page shows for any directory entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryCard {
    pub name: String,
    pub country: String,
    pub city: String,
    pub coordinates: Coordinates,
    pub photo: String,
    pub sections: Vec<Section>,
    pub reviews: Vec<Review>,
}

impl DirectoryCard {
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// Hospitals, malls and institutes: listable, editable, reviewable.
#[async_trait]
pub trait DirectoryKind: FormBinding + TableView {
    fn review_target(&self) -> ReviewTarget;

    async fn fetch(&self, api: &ApiClient, id: &str) -> ClientResult<Self::Record>;

    fn card(&self, record: &Self::Record) -> DirectoryCard;

    /// Country and city pickers, with cities narrowed to the chosen country.
    fn location_options(&self, country: &str) -> ChoiceOptions {
        let mut options = ChoiceOptions::new();
        options.insert("country".into(), pairs(&maps::countries()));
        options.insert("city".into(), pairs(maps::cities_of(country)));
        options
    }
}

fn pairs(items: &[&str]) -> Vec<(String, String)> {
    items.iter().map(|i| (i.to_string(), i.to_string())).collect()
}

struct Common {
    country: String,
    city: String,
    coordinates: Coordinates,
    created_by: Option<String>,
    photo: String,
}

fn common(values: &FormValues, ctx: &FormContext) -> Common {
    Common {
        country: values.text("country").to_string(),
        city: values.text("city").to_string(),
        coordinates: Coordinates {
            lat: values.f64("lat").unwrap_or_default(),
            lon: values.f64("lon").unwrap_or_default(),
        },
        created_by: ctx.profile_id.clone(),
        photo: values.hosted_urls("photo").into_iter().next().unwrap_or_default(),
    }
}

fn prefill_common(country: &str, city: &str, coordinates: Coordinates, photo: &str) -> FormValues {
    let photos: Vec<String> = if photo.is_empty() { vec![] } else { vec![photo.to_string()] };
    FormValues::new()
        .with_text("country", country)
        .with_text("city", city)
        .with_text("lat", coordinates.lat.to_string())
        .with_text("lon", coordinates.lon.to_string())
        .with_hosted_images("photo", &photos)
}

fn location_cell(coordinates: Coordinates) -> String {
    format!("{}, {}", coordinates.lat, coordinates.lon)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Hospitals;

#[async_trait]
impl CrudResource for Hospitals {
    type Record = Hospital;
    type Draft = HospitalPayload;

    fn label(&self) -> &'static str {
        "Hospital"
    }

    fn record_id<'a>(&self, record: &'a Hospital) -> &'a str {
        &record.id
    }

    async fn list(&self, api: &ApiClient) -> ClientResult<Vec<Hospital>> {
        directory_service::list_hospitals(api).await
    }

    async fn create(&self, api: &ApiClient, draft: &HospitalPayload) -> ClientResult<()> {
        directory_service::create_hospital(api, draft).await.map(drop)
    }

    async fn update(&self, api: &ApiClient, id: &str, draft: &HospitalPayload) -> ClientResult<()> {
        directory_service::update_hospital(api, id, draft).await.map(drop)
    }

    async fn delete(&self, api: &ApiClient, id: &str) -> ClientResult<()> {
        directory_service::delete_hospital(api, id).await
    }
}

impl TableView for Hospitals {
    fn columns(&self) -> &'static [&'static str] {
        &["Hospital Name", "Country", "City", "Location"]
    }

    fn cells(&self, record: &Hospital) -> Vec<String> {
        vec![
            record.hospital_name.clone(),
            record.country.clone(),
            record.city.clone(),
            location_cell(record.coordinates),
        ]
    }
}

impl FormBinding for Hospitals {
    fn schema(&self) -> FormSchema {
        schemas::hospital()
    }

    fn prefill(&self, record: &Hospital) -> FormValues {
        prefill_common(&record.country, &record.city, record.coordinates, &record.photo)
            .with_text("hospitalName", record.hospital_name.clone())
            .with_list("departments", record.other.departments.clone())
            .with_list("doctors", record.other.doctors.clone())
    }

    fn draft(&self, values: &FormValues, ctx: &FormContext) -> HospitalPayload {
        let common = common(values, ctx);
        HospitalPayload {
            hospital_name: values.text("hospitalName").trim().to_string(),
            country: common.country,
            city: common.city,
            coordinates: common.coordinates,
            created_by: common.created_by,
            photo: common.photo,
            other: HospitalOther {
                departments: values.list("departments").to_vec(),
                doctors: values.list("doctors").to_vec(),
            },
        }
    }

    fn created_message(&self, _values: &FormValues, _options: &ChoiceOptions) -> String {
        "Hospital added successfully.".into()
    }
}

#[async_trait]
impl DirectoryKind for Hospitals {
    fn review_target(&self) -> ReviewTarget {
        ReviewTarget::Hospital
    }

    async fn fetch(&self, api: &ApiClient, id: &str) -> ClientResult<Hospital> {
        directory_service::get_hospital(api, id).await
    }

    fn card(&self, record: &Hospital) -> DirectoryCard {
        DirectoryCard {
            name: record.hospital_name.clone(),
            country: record.country.clone(),
            city: record.city.clone(),
            coordinates: record.coordinates,
            photo: record.photo.clone(),
            sections: vec![
                Section::new("Departments", &record.other.departments, "No departments available"),
                Section::new("Doctors", &record.other.doctors, "No doctors available"),
            ],
            reviews: record.reviews.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Malls;

#[async_trait]
impl CrudResource for Malls {
    type Record = Mall;
    type Draft = MallPayload;

    fn label(&self) -> &'static str {
        "Shopping Mall"
    }

    fn record_id<'a>(&self, record: &'a Mall) -> &'a str {
        &record.id
    }

    async fn list(&self, api: &ApiClient) -> ClientResult<Vec<Mall>> {
        directory_service::list_malls(api).await
    }

    async fn create(&self, api: &ApiClient, draft: &MallPayload) -> ClientResult<()> {
        directory_service::create_mall(api, draft).await.map(drop)
    }

    async fn update(&self, api: &ApiClient, id: &str, draft: &MallPayload) -> ClientResult<()> {
        directory_service::update_mall(api, id, draft).await.map(drop)
    }

    async fn delete(&self, api: &ApiClient, id: &str) -> ClientResult<()> {
        directory_service::delete_mall(api, id).await
    }
}

impl TableView for Malls {
    fn columns(&self) -> &'static [&'static str] {
        &["Mall Name", "Country", "City", "Location"]
    }

    fn cells(&self, record: &Mall) -> Vec<String> {
        vec![
            record.shopping_mall_name.clone(),
            record.country.clone(),
            record.city.clone(),
            location_cell(record.coordinates),
        ]
    }
}

impl FormBinding for Malls {
    fn schema(&self) -> FormSchema {
        schemas::mall()
    }

    fn prefill(&self, record: &Mall) -> FormValues {
        prefill_common(&record.country, &record.city, record.coordinates, &record.photo)
            .with_text("shoppingMallName", record.shopping_mall_name.clone())
            .with_list("outlets", record.other.outlets.clone())
            .with_list("foodCourts", record.other.food_courts.clone())
    }

    fn draft(&self, values: &FormValues, ctx: &FormContext) -> MallPayload {
        let common = common(values, ctx);
        MallPayload {
            shopping_mall_name: values.text("shoppingMallName").trim().to_string(),
            country: common.country,
            city: common.city,
            coordinates: common.coordinates,
            created_by: common.created_by,
            photo: common.photo,
            other: MallOther {
                outlets: values.list("outlets").to_vec(),
                food_courts: values.list("foodCourts").to_vec(),
            },
        }
    }

    fn created_message(&self, _values: &FormValues, _options: &ChoiceOptions) -> String {
        "Mall added successfully.".into()
    }
}

#[async_trait]
impl DirectoryKind for Malls {
    fn review_target(&self) -> ReviewTarget {
        ReviewTarget::Shopping
    }

    async fn fetch(&self, api: &ApiClient, id: &str) -> ClientResult<Mall> {
        directory_service::get_mall(api, id).await
    }

    fn card(&self, record: &Mall) -> DirectoryCard {
        DirectoryCard {
            name: record.shopping_mall_name.clone(),
            country: record.country.clone(),
            city: record.city.clone(),
            coordinates: record.coordinates,
            photo: record.photo.clone(),
            sections: vec![
                Section::new("Outlets", &record.other.outlets, "No outlets available"),
                Section::new("Food Courts", &record.other.food_courts, "No Food Courts available"),
            ],
            reviews: record.reviews.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Institutes;

#[async_trait]
impl CrudResource for Institutes {
    type Record = Institute;
    type Draft = InstitutePayload;

    fn label(&self) -> &'static str {
        "Institute"
    }

    fn record_id<'a>(&self, record: &'a Institute) -> &'a str {
        &record.id
    }

    async fn list(&self, api: &ApiClient) -> ClientResult<Vec<Institute>> {
        directory_service::list_institutes(api).await
    }

    async fn create(&self, api: &ApiClient, draft: &InstitutePayload) -> ClientResult<()> {
        directory_service::create_institute(api, draft).await.map(drop)
    }

    async fn update(&self, api: &ApiClient, id: &str, draft: &InstitutePayload) -> ClientResult<()> {
        directory_service::update_institute(api, id, draft).await.map(drop)
    }

    async fn delete(&self, api: &ApiClient, id: &str) -> ClientResult<()> {
        directory_service::delete_institute(api, id).await
    }
}

impl TableView for Institutes {
    fn columns(&self) -> &'static [&'static str] {
        &["Institute Name", "Institute Type", "Country", "City", "Location"]
    }

    fn cells(&self, record: &Institute) -> Vec<String> {
        vec![
            record.institution_name.clone(),
            record.institution_type.clone(),
            record.country.clone(),
            record.city.clone(),
            location_cell(record.coordinates),
        ]
    }
}

impl FormBinding for Institutes {
    fn schema(&self) -> FormSchema {
        schemas::institute()
    }

    fn prefill(&self, record: &Institute) -> FormValues {
        prefill_common(&record.country, &record.city, record.coordinates, &record.photo)
            .with_text("institutionName", record.institution_name.clone())
            .with_text("institutionType", record.institution_type.clone())
            .with_list("departments", record.other.departments.clone())
            .with_list("faculty", record.other.faculty.clone())
    }

    fn draft(&self, values: &FormValues, ctx: &FormContext) -> InstitutePayload {
        let common = common(values, ctx);
        InstitutePayload {
            institution_name: values.text("institutionName").trim().to_string(),
            institution_type: values.text("institutionType").trim().to_string(),
            country: common.country,
            city: common.city,
            coordinates: common.coordinates,
            created_by: common.created_by,
            photo: common.photo,
            other: InstituteOther {
                departments: values.list("departments").to_vec(),
                faculty: values.list("faculty").to_vec(),
            },
        }
    }

    fn created_message(&self, _values: &FormValues, _options: &ChoiceOptions) -> String {
        "Institute added successfully.".into()
    }
}

#[async_trait]
impl DirectoryKind for Institutes {
    fn review_target(&self) -> ReviewTarget {
        ReviewTarget::Institute
    }

    async fn fetch(&self, api: &ApiClient, id: &str) -> ClientResult<Institute> {
        directory_service::get_institute(api, id).await
    }

    fn card(&self, record: &Institute) -> DirectoryCard {
        DirectoryCard {
            name: record.institution_name.clone(),
            country: record.country.clone(),
            city: record.city.clone(),
            coordinates: record.coordinates,
            photo: record.photo.clone(),
            sections: vec![
                Section::new("Departments", &record.other.departments, "No departments available"),
                Section::new("Faculty", &record.other.faculty, "No faculty members available"),
            ],
            reviews: record.reviews.clone(),
        }
    }
}
