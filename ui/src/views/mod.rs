mod form_container;
pub use form_container::FormContainer;

mod sign_in;
pub use sign_in::SignIn;

mod sign_up;
pub use sign_up::SignUp;
