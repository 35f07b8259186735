#![allow(non_snake_case)]

mod client;
mod model;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use kashi_darshan::server::{config::Config, router, scheduler::Scheduler, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let session = startup::connect_to_session(&config).await?;
        let db = startup::connect_to_database(&config).await?;
        let state = startup::build_app_state(&config, db.clone())?;
        startup::bootstrap_admin(&config, &state).await?;

        Scheduler::new(db).await?.start().await?;

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = router::routes().with_state(state).layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
