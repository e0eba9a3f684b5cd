pub mod confirmation;
pub mod email;
pub mod markup;
pub mod webinar;
