mod about;
mod contact;
mod not_found;
mod products;
mod solutions;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use not_found::NotFoundPage;
pub use products::ProductsPage;
pub use solutions::SolutionsPage;
