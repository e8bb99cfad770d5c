pub mod api;
pub mod routes;
pub mod views;

pub use self::{
    routes::{PageRoute, ROUTES, router},
    views::View,
};
