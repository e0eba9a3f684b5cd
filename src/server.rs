use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use crate::config::SessionCatalog;
use crate::routes;
use crate::services::webinar::SignupService;

/// Builds the HTTP server on an already bound listener. The caller awaits it.
pub fn run(
    listener: TcpListener,
    signups: SignupService,
    catalog: SessionCatalog,
) -> std::io::Result<Server> {
    let signups = web::Data::new(signups);
    let catalog = web::Data::new(catalog);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(signups.clone())
            .app_data(catalog.clone())
            .configure(routes::init)
            .default_service(web::to(routes::pages::not_found))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
