use actix_web::web;

pub mod health;
pub mod mail;
pub mod user;

// Wire paths match the original frontend contract, one scope per endpoint.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(web::scope("/users").service(user::list::list));
    cfg.service(web::scope("/add-user").service(user::create::create));
    cfg.service(web::scope("/decrypt").service(user::reveal::reveal));
    cfg.service(web::scope("/send-email").service(mail::send::send));
    cfg.service(web::scope("/verify-signature").service(mail::verify::verify));
}
