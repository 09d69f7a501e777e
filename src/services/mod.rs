pub mod category_service;
pub mod directory_service;
pub mod form_service;
pub mod order_service;
pub mod product_service;
pub mod profile_service;
pub mod settings_service;
pub mod stock_service;
pub mod upload_service;
pub mod user_service;
pub mod vendor_service;
