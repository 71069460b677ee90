pub mod check_email;
pub mod city;
pub mod contact;
pub mod favorites;
pub mod home;
pub mod landing;
pub mod login;
pub mod my_properties;
pub mod property;
pub mod publish;
pub mod search;

pub use check_email::{auth_error_content, check_email_content, check_email_page};
pub use city::city_page;
pub use contact::contact_page;
pub use favorites::favorites_page;
pub use home::{home_page, HomeVm};
pub use landing::{landing_page, LandingVm};
pub use login::{login_page, register_page};
pub use my_properties::my_properties_page;
pub use property::{property_page, PropertyVm};
pub use publish::publish_page;
pub use search::{search_page, SearchVm};
