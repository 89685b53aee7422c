use crate::configuration::Settings;
use crate::routes;
use crate::services::Translator;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    // single translator instance shared by the workers
    let translator = web::Data::new(Translator::new());

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/chat")
                    .service(routes::chat::add::add)
                    .service(routes::chat::get::history),
            )
            .service(routes::premium::whatsapp::enable)
            .service(routes::premium::email::enable)
            .service(routes::premium::language::enable)
            .service(routes::premium::training::add)
            .service(routes::premium::subscription::add)
            .app_data(json_config.clone())
            .app_data(settings.clone())
            .app_data(pg_pool.clone())
            .app_data(translator.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
