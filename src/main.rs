use actix_web::{middleware::Logger, web, App, HttpServer};
use taskvault::{config::Config, routes, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let state = match AppState::connect(&config).await {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("failed to initialise the store: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Starting taskvault server at {}", config.server_url());

    let bind = (config.server_host.clone(), config.server_port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(config.cors())
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind(bind)?
    .run()
    .await
}
