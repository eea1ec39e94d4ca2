//src/items/src/inventory.rs
use error::InventoryError;
use serde::{Deserialize, Serialize};

use crate::{Armour, Enchantment, Item, Potion, Weapon};

/// 有容量上限的背包
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// 添加物品，背包满时失败
    pub fn add(&mut self, item: Item) -> Result<(), InventoryError> {
        if self.is_full() {
            return Err(InventoryError::Full);
        }
        self.items.push(item);
        Ok(())
    }

    /// 尽量添加，超出剩余空间的部分被丢弃；返回实际加入的数量
    pub fn add_all(&mut self, items: impl IntoIterator<Item = Item>) -> usize {
        let space = self.capacity.saturating_sub(self.items.len());
        let before = self.items.len();
        self.items.extend(items.into_iter().take(space));
        self.items.len() - before
    }

    pub fn remove(&mut self, index: usize) -> Result<Item, InventoryError> {
        if index >= self.items.len() {
            return Err(InventoryError::InvalidIndex(index));
        }
        Ok(self.items.remove(index))
    }

    /// 移除第一个与之相等的物品
    pub fn remove_item(&mut self, item: &Item) -> Result<Item, InventoryError> {
        let index = self
            .position(item)
            .ok_or(InventoryError::ItemNotFound)?;
        Ok(self.items.remove(index))
    }

    pub fn position(&self, item: &Item) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.position(item).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn weapons(&self) -> Vec<&Weapon> {
        self.items
            .iter()
            .filter_map(|i| match i {
                Item::Weapon(w) => Some(w),
                _ => None,
            })
            .collect()
    }

    pub fn armour(&self) -> Vec<&Armour> {
        self.items
            .iter()
            .filter_map(|i| match i {
                Item::Armour(a) => Some(a),
                _ => None,
            })
            .collect()
    }

    /// 药水及其在背包中的位置（战斗菜单用）
    pub fn potions(&self) -> Vec<(usize, &Potion)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, i)| match i {
                Item::Potion(p) => Some((index, p)),
                _ => None,
            })
            .collect()
    }

    pub fn enchantments(&self) -> Vec<Enchantment> {
        self.items
            .iter()
            .filter_map(|i| match i {
                Item::Enchantment(e) => Some(*e),
                _ => None,
            })
            .collect()
    }

    /// 最便宜的武器（用作初始装备）
    pub fn cheapest_weapon(&self) -> Option<&Weapon> {
        self.weapons().into_iter().min_by_key(|w| w.cost())
    }

    /// 最便宜的护甲（用作初始装备）
    pub fn cheapest_armour(&self) -> Option<&Armour> {
        self.armour().into_iter().min_by_key(|a| a.cost)
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PotionKind;

    fn dagger(cost: i32) -> Item {
        Weapon::new("Dagger", cost, 1, 4, "Dagger", "Piercing").into()
    }

    #[test]
    fn test_capacity_limit() {
        let mut inv = Inventory::new(2);
        inv.add(dagger(1)).unwrap();
        inv.add(dagger(2)).unwrap();
        assert!(inv.is_full());
        assert_eq!(inv.add(dagger(3)), Err(InventoryError::Full));
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn test_add_all_truncates() {
        let mut inv = Inventory::new(3);
        inv.add(dagger(1)).unwrap();
        let added = inv.add_all((0..5).map(dagger));
        assert_eq!(added, 2);
        assert!(inv.is_full());
    }

    #[test]
    fn test_remove_by_value_takes_first_match() {
        let mut inv = Inventory::new(5);
        inv.add(dagger(1)).unwrap();
        inv.add(Enchantment::Power.into()).unwrap();
        inv.add(dagger(1)).unwrap();
        inv.remove_item(&dagger(1)).unwrap();
        assert_eq!(inv.get(0), Some(&Item::Enchantment(Enchantment::Power)));
        assert_eq!(inv.len(), 2);
        assert_eq!(
            inv.remove_item(&dagger(9)),
            Err(InventoryError::ItemNotFound)
        );
        assert_eq!(inv.remove(7), Err(InventoryError::InvalidIndex(7)));
    }

    #[test]
    fn test_typed_views() {
        let mut inv = Inventory::new(10);
        inv.add(dagger(12)).unwrap();
        inv.add(Armour::new("Leather", 8, 1, 3, "Leather").into())
            .unwrap();
        inv.add(Armour::new("Chain", 20, 3, 6, "Iron").into()).unwrap();
        inv.add(Potion::with_kind("Tonic", 5, 2, 4, PotionKind::Healing).into())
            .unwrap();
        inv.add(dagger(4)).unwrap();
        inv.add(Enchantment::DamageV.into()).unwrap();

        assert_eq!(inv.weapons().len(), 2);
        assert_eq!(inv.armour().len(), 2);
        assert_eq!(inv.potions()[0].0, 3);
        assert_eq!(inv.enchantments(), vec![Enchantment::DamageV]);
        assert_eq!(inv.cheapest_weapon().map(|w| w.cost()), Some(4));
        assert_eq!(inv.cheapest_armour().map(|a| a.name.as_str()), Some("Leather"));
    }
}
