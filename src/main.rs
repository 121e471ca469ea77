pub mod api;
pub mod mail_dispatcher;

pub mod data_structs {
    pub mod app_config;
    pub mod requests {
        pub mod email_send_request;
    }
    pub mod responses {
        pub mod status_response;
    }
}

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::info;

use crate::data_structs::app_config::{AppConfig, CredentialMode};
use crate::mail_dispatcher::{Mailer, SmtpMailer};

pub struct SharedResources {
    pub config: AppConfig,
    pub mailer: Arc<dyn Mailer>,
}

impl Clone for SharedResources {
    fn clone(&self) -> Self {
        return SharedResources {
            config: self.config.clone(),
            mailer: self.mailer.clone(),
        };
    }
}

fn load() -> SharedResources {
    info!("Loading configuration...");
    let config = AppConfig::from_env();

    match &config.credential_mode {
        CredentialMode::Environment(settings) => {
            info!(
                "Relaying as {} via {}:{}",
                settings.username, settings.server, settings.port
            );
        }
        CredentialMode::PerRequest => {
            info!("Relaying with per-request credentials");
        }
    }

    return SharedResources {
        config,
        mailer: Arc::new(SmtpMailer),
    };
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let shared_resources = load();
    let bind_port = shared_resources.config.bind_port;

    info!("Starting HTTP server on port {}...", bind_port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(shared_resources.clone()))
            .app_data(api::json_config())
            .wrap(Cors::permissive())
            .wrap(Logger::new("%a \"%r\" %s %b \"%{User-Agent}i\" %T"))
            .service(api::health)
            .service(api::send_email)
    })
    .bind(("0.0.0.0", bind_port))?
    .run()
    .await
}
