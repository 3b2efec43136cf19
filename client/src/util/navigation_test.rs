#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn navigate_is_noop_but_callable() {
    WindowNavigator.navigate("/login");
    WindowNavigator.navigate("/");
}
