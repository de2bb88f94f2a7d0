pub mod domain;
pub mod phone;
pub mod ports;
pub mod validation;

pub use domain::{
    AuthSession, Credentials, LoginForm, PhoneField, RegistrationRequest, SessionState,
    SessionStatus, SignupForm, User, VerificationForm, VerificationRequest,
};
pub use ports::{
    CredentialStore, GatewayError, GatewayResult, Navigator, Notifier, PortError, PortResult,
    UserGateway,
};
pub use validation::{validate_login, validate_signup, validate_verification, ValidationErrors};
