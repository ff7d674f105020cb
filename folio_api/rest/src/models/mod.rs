use serde::Serialize;

pub mod contact;
pub mod relay;
pub mod ui;

#[derive(Serialize)]
pub struct ApiError<D> {
    pub detail: D,
}
