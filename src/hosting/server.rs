use super::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(arena: Arena, bind: &str, workers: usize) -> Result<(), std::io::Error> {
        let arena = web::Data::new(arena);
        log::info!("starting hosting server on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(arena.clone())
                .configure(routes)
        })
        .workers(workers)
        .bind(bind)?
        .run()
        .await
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health))
        .route("/game", web::post().to(handlers::play))
        .route("/score", web::get().to(handlers::score));
}
