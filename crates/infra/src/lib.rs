mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, GoogleSheetsConfig, SmtpConfig};
pub use repos::{
    ICallBookingRepo, IContactRepo, IRegistrantRepo, IRoundRobinRepo, InMemoryRegistrantRepo,
    Repos,
};
pub use services::mailer::{IMailer, InMemoryMailer, SentEmail};
pub use services::{INotifier, Services};
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::warn;

#[derive(Clone)]
pub struct LeadflowContext {
    pub repos: Repos,
    pub services: Services,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl LeadflowContext {
    fn create(config: Config) -> Self {
        let sys: Arc<dyn ISys> = Arc::new(RealSys {});
        let repos = match Repos::create_sheets(&config, sys.clone()) {
            Some(repos) => repos,
            None => {
                warn!("Registrants and submissions will only be kept in memory");
                Repos {
                    round_robin: Arc::new(repos::FileRoundRobinRepo::new(
                        config.assignment_state_path.clone(),
                    )),
                    ..Repos::create_inmemory()
                }
            }
        };
        Self {
            repos,
            services: Services::create(&config),
            config,
            sys,
        }
    }

    /// Context without any external collaborators. Emails end up in an
    /// `InMemoryMailer`.
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            services: Services::create_inmemory(Arc::new(InMemoryMailer::new())),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }

    /// Replaces the mailer of the context and returns it, so tests can
    /// inspect the outbox
    pub fn with_inmemory_mailer(&mut self) -> Arc<InMemoryMailer> {
        let mailer = Arc::new(InMemoryMailer::new());
        self.services = Services::create_inmemory(mailer.clone());
        mailer
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> LeadflowContext {
    LeadflowContext::create(Config::new())
}
