//! データセット変更の監視
//!
//! 構造変更の種類を問わずタブを作り直す。差分更新はしない。

use crate::widget::{DataChange, ItemList, ListenerId};

/// リストに登録したデータオブザーバー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataChangeObserver {
    id: ListenerId,
}

impl DataChangeObserver {
    pub fn register<L: ItemList + ?Sized>(list: &mut L) -> Self {
        Self {
            id: list.register_data_observer(),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn unregister<L: ItemList + ?Sized>(self, list: &mut L) {
        list.unregister_data_observer(self.id);
    }

    /// 自分宛ての通知なら、タブの再構築が必要かを返す
    pub fn on_changed(&self, observer: ListenerId, change: DataChange) -> bool {
        if observer != self.id {
            return false;
        }
        tracing::debug!(?change, "data set changed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LinearLayout;
    use crate::widget::{HeadlessList, Item};

    #[test]
    fn test_every_structural_change_requests_repopulate() {
        let mut list = HeadlessList::with_items(LinearLayout::new(100), vec![Item::new(0, 10)]);
        let observer = DataChangeObserver::register(&mut list);

        let changes = [
            DataChange::Reset,
            DataChange::RangeChanged { start: 0, count: 1 },
            DataChange::RangeInserted { start: 0, count: 2 },
            DataChange::RangeRemoved { start: 1, count: 1 },
            DataChange::RangeMoved { from: 0, to: 1, count: 1 },
        ];
        for change in changes {
            assert!(observer.on_changed(observer.id(), change));
        }
    }

    #[test]
    fn test_foreign_notification_is_ignored() {
        let mut list = HeadlessList::with_items(LinearLayout::new(100), vec![]);
        let observer = DataChangeObserver::register(&mut list);
        assert!(!observer.on_changed(ListenerId(observer.id().0 + 100), DataChange::Reset));
    }

    #[test]
    fn test_unregister_removes_observer_from_list() {
        let mut list = HeadlessList::with_items(LinearLayout::new(100), vec![]);
        let observer = DataChangeObserver::register(&mut list);
        assert_eq!(list.data_observer_count(), 1);

        observer.unregister(&mut list);
        assert_eq!(list.data_observer_count(), 0);
    }
}
