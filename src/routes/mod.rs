use crate::utils::webutils::{validate_admin_token, validate_token};
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod auth;
pub mod drivers;
pub mod health;
pub mod stolen_cars;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = HttpAuthentication::bearer(validate_token);
    let admin_auth = HttpAuthentication::bearer(validate_admin_token);

    cfg.service(health::root);
    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/token").service(auth::token::token)
    );
    cfg.service(
        web::scope("/register").service(auth::register::register)
    );
    cfg.service(
        web::scope("/me").service(auth::me::me).wrap(user_auth.clone())
    );
    cfg.service(
        web::scope("/my-driver-profile")
            .service(auth::me::my_driver_profile)
            .wrap(user_auth.clone())
    );
    // Listing is public, reporting needs a login, closing a report is admin work.
    // Order matters: the empty scope swallows everything left over.
    cfg.service(
        web::scope("/stolen-cars")
            .service(stolen_cars::list::list_stolen_cars)
            .service(
                web::scope("/{report_id}")
                    .service(stolen_cars::resolve::mark_found)
                    .wrap(admin_auth.clone())
            )
            .service(
                web::scope("")
                    .service(stolen_cars::report::report_stolen_car)
                    .wrap(user_auth)
            )
    );
    cfg.service(
        web::scope("/report-sighting").service(stolen_cars::sighting::report_sighting)
    );
    cfg.service(
        web::scope("/drivers")
            .service(drivers::create::create_driver)
            .service(drivers::list::list_drivers)
            .wrap(admin_auth)
    );
    cfg.service(
        web::scope("/verify").service(drivers::verify::verify_plate)
    );
    cfg.service(
        web::scope("/public/drivers").service(drivers::public::public_driver_profile)
    );
}
