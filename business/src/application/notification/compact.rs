use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::NotifiedKey;
use crate::domain::notification::state::NotificationState;
use crate::domain::notification::use_cases::compact::{
    CompactNotifiedSetParams, CompactNotifiedSetUseCase,
};

pub struct CompactNotifiedSetUseCaseImpl {
    pub state: NotificationState,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CompactNotifiedSetUseCase for CompactNotifiedSetUseCaseImpl {
    async fn execute(&self, params: CompactNotifiedSetParams) -> Result<usize, NotificationError> {
        let current: Vec<NotifiedKey> = params
            .products
            .iter()
            .filter_map(NotifiedKey::for_product)
            .collect();

        let mut notified_set = self.state.load_notified_set().await;
        let removed = notified_set.retain_keys(&current);

        if removed > 0 {
            self.state.save_notified_set(&notified_set).await?;
        }

        self.logger.info(&format!(
            "Compacted notified products: removed {}, kept {}",
            removed,
            notified_set.len()
        ));
        Ok(removed)
    }
}
