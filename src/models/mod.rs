pub mod webinar;
