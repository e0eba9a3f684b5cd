//! Sign-up form behaviour, independent of any particular UI toolkit.
//!
//! [`SignupForm`] holds what the user typed and which of the end states the
//! form is in, [`SignupApi`] talks to the endpoint, and [`SignupFlow`] ties
//! them together with the success notice timer and the redirect home.

pub mod api;
pub mod flow;
pub mod form;

pub use api::{HttpSignupApi, SignupApi, SubmitError};
pub use flow::{Navigator, SignupFlow};
pub use form::{FormState, SignupForm, SubmitBlocked, SUCCESS_NOTICE_DELAY};
