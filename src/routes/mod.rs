pub mod pages;
pub mod webinar;

use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
    webinar::init(cfg);
    pages::init(cfg);
}
