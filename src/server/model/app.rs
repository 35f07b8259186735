use sea_orm::DatabaseConnection;

use crate::server::service::{
    auth::{otp::OtpClient, token::TokenService},
    media::cloudinary::CloudinaryClient,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub tokens: TokenService,
    pub otp_client: OtpClient,
    pub cloudinary: CloudinaryClient,
}
