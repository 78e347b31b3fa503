mod desktop;
mod permission;
mod webhook;

pub use desktop::DesktopNotifier;
pub use permission::{PERMISSION_KEY, PermissionPrompt, StoredPermissionService};
pub use webhook::WebhookNotifier;
