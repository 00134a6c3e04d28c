use super::error_conversions::js_error_message;
use crate::domain::notification::{NotificationError, PermissionState};
use crate::ports::NotifierPort;
use async_trait::async_trait;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Notification, NotificationOptions, NotificationPermission};

/// Browser notifier backed by the Notifications API.
///
/// Hosts without the API (some workers, old browsers) report `Denied` so
/// the gateway never offers a prompt it cannot honour.
#[derive(Clone, Copy)]
pub struct Notifier;

impl Notifier {
    pub fn new() -> Self {
        Self
    }

    pub fn is_supported(&self) -> bool {
        js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Notification")).unwrap_or(false)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

fn to_permission_state(permission: NotificationPermission) -> PermissionState {
    match permission {
        NotificationPermission::Granted => PermissionState::Granted,
        NotificationPermission::Denied => PermissionState::Denied,
        _ => PermissionState::Default,
    }
}

#[async_trait(?Send)]
impl NotifierPort for Notifier {
    fn permission(&self) -> PermissionState {
        if !self.is_supported() {
            return PermissionState::Denied;
        }
        to_permission_state(Notification::permission())
    }

    async fn request_permission(&self) -> Result<PermissionState, NotificationError> {
        if !self.is_supported() {
            return Err(NotificationError::unsupported(
                "Notification API missing from global scope",
            ));
        }

        let promise = Notification::request_permission()
            .map_err(|e| NotificationError::permission_request_failed(js_error_message(&e)))?;
        let answer = JsFuture::from(promise)
            .await
            .map_err(|e| NotificationError::permission_request_failed(js_error_message(&e)))?;

        answer
            .as_string()
            .and_then(|state| state.parse().ok())
            .ok_or_else(|| {
                NotificationError::permission_request_failed("Unexpected permission answer")
            })
    }

    fn show(&self, title: &str, body: &str) -> Result<(), NotificationError> {
        let options = NotificationOptions::new();
        options.set_body(body);

        Notification::new_with_options(title, &options)
            .map(|_| ())
            .map_err(|e| NotificationError::delivery_failed(js_error_message(&e)))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_notifier_reports_a_state() {
        let notifier = Notifier::new();
        assert!(notifier.is_supported(), "Browser should expose Notification");
        let _ = notifier.permission();
    }

    #[wasm_bindgen_test]
    fn test_permission_mapping() {
        assert_eq!(
            to_permission_state(NotificationPermission::Granted),
            PermissionState::Granted
        );
        assert_eq!(
            to_permission_state(NotificationPermission::Denied),
            PermissionState::Denied
        );
        assert_eq!(
            to_permission_state(NotificationPermission::Default),
            PermissionState::Default
        );
    }
}
