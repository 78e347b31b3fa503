use std::sync::Arc;

use backend::client::BackendClient;
use backend::product_repository::ProductRepositoryHttp;
use backend::settings_repository::UserSettingsRepositoryHttp;
use logger::TracingLogger;
use notifier::{DesktopNotifier, StoredPermissionService, WebhookNotifier};
use persistence::key_value::repository::KeyValueStoreSqlite;
use persistence::product::repository::ProductRepositoryJsonFile;

use business::application::notification::compact::CompactNotifiedSetUseCaseImpl;
use business::application::notification::get_settings::GetNotificationSettingsUseCaseImpl;
use business::application::notification::permission_status::GetPermissionStatusUseCaseImpl;
use business::application::notification::request_permission::RequestPermissionUseCaseImpl;
use business::application::notification::schedule::ScheduleExpiryNotificationsUseCaseImpl;
use business::application::notification::sync_settings::SyncUserSettingsUseCaseImpl;
use business::application::notification::update_settings::UpdateNotificationSettingsUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::notification::dispatcher::NotificationDispatcher;
use business::domain::notification::services::NotificationChannel;
use business::domain::notification::state::NotificationState;
use business::domain::notification::use_cases::compact::CompactNotifiedSetUseCase;
use business::domain::notification::use_cases::get_settings::GetNotificationSettingsUseCase;
use business::domain::notification::use_cases::permission_status::GetPermissionStatusUseCase;
use business::domain::notification::use_cases::request_permission::RequestPermissionUseCase;
use business::domain::notification::use_cases::schedule::ScheduleExpiryNotificationsUseCase;
use business::domain::notification::use_cases::sync_settings::SyncUserSettingsUseCase;
use business::domain::notification::use_cases::update_settings::UpdateNotificationSettingsUseCase;
use business::domain::product::repository::ProductRepository;
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::shared::clock::{Clock, SystemClock};

use crate::config::app_config::AppConfig;
use crate::setup::terminal_prompt::TerminalPrompt;

pub struct DependencyContainer {
    pub clock: Arc<dyn Clock>,
    pub get_all_products: Arc<dyn GetAllProductsUseCase>,
    pub schedule: Arc<dyn ScheduleExpiryNotificationsUseCase>,
    pub request_permission: Arc<dyn RequestPermissionUseCase>,
    pub permission_status: Arc<dyn GetPermissionStatusUseCase>,
    pub get_settings: Arc<dyn GetNotificationSettingsUseCase>,
    pub update_settings: Arc<dyn UpdateNotificationSettingsUseCase>,
    /// Only available with a backend to sync from.
    pub sync_settings: Option<Arc<dyn SyncUserSettingsUseCase>>,
    pub compact: Arc<dyn CompactNotifiedSetUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig, pool: sqlx::SqlitePool) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("cli"));
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        // Infrastructure adapters
        let store = Arc::new(KeyValueStoreSqlite::new(pool, logger.clone()));
        let state = NotificationState::new(store.clone(), logger.clone());

        let backend_client = config
            .backend
            .as_ref()
            .map(|b| BackendClient::new(b.api_url.clone(), b.api_token.clone()));

        let product_repository: Arc<dyn ProductRepository> = match &backend_client {
            Some(client) => Arc::new(ProductRepositoryHttp::new(client.clone(), logger.clone())),
            None => Arc::new(ProductRepositoryJsonFile::new(
                config.products_file.clone(),
                logger.clone(),
            )),
        };

        let permission = Arc::new(StoredPermissionService::new(
            store,
            Arc::new(TerminalPrompt {
                app_name: config.app_name.clone(),
            }),
            logger.clone(),
        ));
        let persistent = config.webhook_url.as_ref().map(|url| {
            Arc::new(WebhookNotifier::new(url.clone(), logger.clone()))
                as Arc<dyn NotificationChannel>
        });

        let dispatcher = NotificationDispatcher {
            permission: permission.clone(),
            persistent,
            direct: Arc::new(DesktopNotifier::new(config.app_name.clone())),
            logger: logger.clone(),
        };

        // Product use cases
        let get_all_products = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Notification use cases
        let schedule = Arc::new(ScheduleExpiryNotificationsUseCaseImpl {
            state: state.clone(),
            dispatcher: dispatcher.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let request_permission = Arc::new(RequestPermissionUseCaseImpl {
            permission,
            logger: logger.clone(),
        });
        let permission_status = Arc::new(GetPermissionStatusUseCaseImpl {
            dispatcher: dispatcher.clone(),
        });
        let get_settings = Arc::new(GetNotificationSettingsUseCaseImpl {
            state: state.clone(),
            dispatcher: dispatcher.clone(),
        });
        let update_settings = Arc::new(UpdateNotificationSettingsUseCaseImpl {
            state: state.clone(),
            dispatcher,
            logger: logger.clone(),
        });
        let sync_settings = backend_client.map(|client| {
            Arc::new(SyncUserSettingsUseCaseImpl {
                settings_repository: Arc::new(UserSettingsRepositoryHttp::new(client, logger.clone())),
                state: state.clone(),
                logger: logger.clone(),
            }) as Arc<dyn SyncUserSettingsUseCase>
        });
        let compact = Arc::new(CompactNotifiedSetUseCaseImpl { state, logger });

        Self {
            clock,
            get_all_products,
            schedule,
            request_permission,
            permission_status,
            get_settings,
            update_settings,
            sync_settings,
            compact,
        }
    }
}
