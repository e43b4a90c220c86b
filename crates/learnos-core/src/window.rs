//! Single-slot window manager.
//!
//! At most one app is open at any time. Opening while another app is open
//! replaces it directly; no close happens in between.

use crate::app::AppDescriptor;

/// What an `open` call did to the window slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowTransition {
    /// The slot was empty.
    Opened,
    /// Another app was showing and has been replaced.
    Replaced { previous: AppDescriptor },
}

/// Owner of the open-app slot.
#[derive(Debug, Clone, Default)]
pub struct WindowManager {
    open: Option<AppDescriptor>,
}

impl WindowManager {
    /// Starts closed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, app: AppDescriptor) -> WindowTransition {
        match self.open.replace(app) {
            None => WindowTransition::Opened,
            Some(previous) => WindowTransition::Replaced { previous },
        }
    }

    /// Closes the open app, returning it. Closing while closed is a no-op.
    pub fn close(&mut self) -> Option<AppDescriptor> {
        self.open.take()
    }

    pub fn current(&self) -> Option<&AppDescriptor> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::default_apps;
    use proptest::prelude::*;

    #[test]
    fn test_initially_closed() {
        let wm = WindowManager::new();
        assert!(!wm.is_open());
        assert!(wm.current().is_none());
    }

    #[test]
    fn test_open_then_close() {
        let apps = default_apps();
        let mut wm = WindowManager::new();

        assert_eq!(wm.open(apps[0].clone()), WindowTransition::Opened);
        assert_eq!(wm.current(), Some(&apps[0]));

        assert_eq!(wm.close(), Some(apps[0].clone()));
        assert!(!wm.is_open());
        assert_eq!(wm.close(), None);
    }

    #[test]
    fn test_open_while_open_replaces() {
        let apps = default_apps();
        let mut wm = WindowManager::new();

        wm.open(apps[0].clone());
        let transition = wm.open(apps[2].clone());

        assert_eq!(
            transition,
            WindowTransition::Replaced {
                previous: apps[0].clone()
            }
        );
        assert_eq!(wm.current(), Some(&apps[2]));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Open(usize),
        Close,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![(0usize..3).prop_map(Op::Open), Just(Op::Close)]
    }

    proptest! {
        #[test]
        fn prop_single_window_exclusivity(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let apps = default_apps();
            let mut wm = WindowManager::new();
            let mut expected: Option<AppDescriptor> = None;

            for op in ops {
                match op {
                    Op::Open(i) => {
                        let transition = wm.open(apps[i].clone());
                        match expected.take() {
                            None => prop_assert_eq!(transition, WindowTransition::Opened),
                            Some(previous) => {
                                prop_assert_eq!(transition, WindowTransition::Replaced { previous })
                            }
                        }
                        expected = Some(apps[i].clone());
                    }
                    Op::Close => {
                        prop_assert_eq!(wm.close(), expected.take());
                    }
                }
                // the slot always holds exactly the last opened app, or nothing
                prop_assert_eq!(wm.current(), expected.as_ref());
                prop_assert_eq!(wm.is_open(), expected.is_some());
            }
        }
    }
}
