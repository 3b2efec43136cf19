#![cfg(not(feature = "hydrate"))]

use super::*;
use session::SESSION_RECORD_KEY;

#[test]
fn every_operation_is_unavailable_outside_the_browser() {
    let storage = BrowserSessionStorage;
    assert!(matches!(storage.get_item(SESSION_RECORD_KEY), Err(StorageError::Unavailable(_))));
    assert!(matches!(storage.set_item(SESSION_RECORD_KEY, "{}"), Err(StorageError::Unavailable(_))));
    assert!(matches!(storage.remove_item(SESSION_RECORD_KEY), Err(StorageError::Unavailable(_))));
}
