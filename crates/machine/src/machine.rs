use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coinvend_core::{
    Aggregate, AggregateRoot, MachineId, MonetaryAmount, SlotIndex, VendingError, VendingResult,
};
use coinvend_events::Event;

use crate::config::MachineConfig;
use crate::item::Item;

/// Command: InsertCoin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertCoin {
    pub coin: MonetaryAmount,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ReplaceCatalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceCatalog {
    pub items: Vec<Item>,
    pub occurred_at: DateTime<Utc>,
}

/// Command: Buy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buy {
    pub slot: SlotIndex,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineCommand {
    InsertCoin(InsertCoin),
    ReplaceCatalog(ReplaceCatalog),
    Buy(Buy),
}

/// Event: CoinInserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinInserted {
    pub machine_id: MachineId,
    pub coin: MonetaryAmount,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CatalogReplaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReplaced {
    pub machine_id: MachineId,
    pub items: Vec<Item>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemVended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemVended {
    pub machine_id: MachineId,
    pub slot: SlotIndex,
    pub name: String,
    pub price: MonetaryAmount,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineEvent {
    CoinInserted(CoinInserted),
    CatalogReplaced(CatalogReplaced),
    ItemVended(ItemVended),
}

impl Event for MachineEvent {
    fn event_type(&self) -> &'static str {
        match self {
            MachineEvent::CoinInserted(_) => "machine.coin.inserted",
            MachineEvent::CatalogReplaced(_) => "machine.catalog.replaced",
            MachineEvent::ItemVended(_) => "machine.item.vended",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            MachineEvent::CoinInserted(e) => e.occurred_at,
            MachineEvent::CatalogReplaced(e) => e.occurred_at,
            MachineEvent::ItemVended(e) => e.occurred_at,
        }
    }
}

/// Aggregate root: one vending machine session.
///
/// The balance persists across insert/buy cycles for the lifetime of the
/// instance. The catalog is either unset (`None`) or a positional list of
/// items; exhausted items stay listed with zero stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendingMachine {
    id: MachineId,
    config: MachineConfig,
    balance: MonetaryAmount,
    catalog: Option<Vec<Item>>,
    version: u64,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl VendingMachine {
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    pub fn with_config(config: MachineConfig) -> Self {
        Self::with_id(MachineId::new(), config)
    }

    pub fn with_id(id: MachineId, config: MachineConfig) -> Self {
        Self {
            id,
            config,
            balance: MonetaryAmount::ZERO,
            catalog: None,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> MachineId {
        self.id
    }

    pub fn manufacturer(&self) -> &str {
        &self.config.manufacturer
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn balance(&self) -> MonetaryAmount {
        self.balance
    }

    /// `None` until a catalog has been set; an empty slice is a set-but-empty catalog.
    pub fn catalog(&self) -> Option<&[Item]> {
        self.catalog.as_deref()
    }

    /// Replaces the catalog wholesale.
    pub fn set_catalog(&mut self, items: Vec<Item>) {
        let command = ReplaceCatalog {
            items,
            occurred_at: Utc::now(),
        };
        let events = self.handle_replace_catalog(command);
        self.apply_all(&events);
        tracing::debug!(
            machine_id = %self.id,
            items = self.catalog.as_ref().map_or(0, Vec::len),
            "catalog replaced"
        );
    }

    /// Accepts a coin and returns the new balance.
    ///
    /// The balance is accumulated with [`MonetaryAmount::add`], which does not
    /// carry: two 50-cent coins leave a balance of `(0, 100)`.
    pub fn insert_coin(&mut self, coin: MonetaryAmount) -> VendingResult<MonetaryAmount> {
        let command = MachineCommand::InsertCoin(InsertCoin {
            coin,
            occurred_at: Utc::now(),
        });
        match self.execute(&command) {
            Ok(()) => {
                tracing::debug!(machine_id = %self.id, %coin, balance = %self.balance, "coin accepted");
                Ok(self.balance)
            }
            Err(err) => {
                tracing::warn!(machine_id = %self.id, %coin, "coin rejected: {err}");
                Err(err)
            }
        }
    }

    /// Reports the money held for the customer.
    ///
    /// This is a query: the balance is not reset.
    pub fn return_money(&self) -> MonetaryAmount {
        self.balance
    }

    /// Sells one unit from `slot`, returning the catalog entry with its updated stock.
    ///
    /// Checks run in a fixed order: catalog set, slot listed, slot in stock,
    /// balance covers the price. The first failing check decides the error and
    /// nothing is mutated.
    pub fn buy(&mut self, slot: SlotIndex) -> VendingResult<&Item> {
        let command = MachineCommand::Buy(Buy {
            slot,
            occurred_at: Utc::now(),
        });
        if let Err(err) = self.execute(&command) {
            tracing::warn!(machine_id = %self.id, %slot, balance = %self.balance, "purchase rejected: {err}");
            return Err(err);
        }

        tracing::debug!(machine_id = %self.id, %slot, balance = %self.balance, "item vended");
        // handle_buy only succeeds for a listed slot of a set catalog.
        let items = self.catalog.as_deref().unwrap_or_default();
        Ok(&items[slot.get()])
    }

    fn execute(&mut self, command: &MachineCommand) -> VendingResult<()> {
        let events = self.handle(command)?;
        self.apply_all(&events);
        Ok(())
    }

    /// Applies events and drops them. Hosts that store events drive
    /// `handle`/`apply` themselves instead.
    fn apply_all(&mut self, events: &[MachineEvent]) {
        for event in events {
            self.apply(event);
        }
    }
}

impl AggregateRoot for VendingMachine {
    type Id = MachineId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Aggregate for VendingMachine {
    type Command = MachineCommand;
    type Event = MachineEvent;
    type Error = VendingError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            MachineEvent::CoinInserted(e) => {
                self.balance = self.balance.add(e.coin);
            }
            MachineEvent::CatalogReplaced(e) => {
                self.catalog = Some(e.items.clone());
            }
            MachineEvent::ItemVended(e) => {
                if let Some(item) = self
                    .catalog
                    .as_mut()
                    .and_then(|items| items.get_mut(e.slot.get()))
                {
                    item.dispense_one();
                }
                self.balance = self.balance.subtract(e.price);
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            MachineCommand::InsertCoin(cmd) => self.handle_insert_coin(cmd),
            MachineCommand::ReplaceCatalog(cmd) => Ok(self.handle_replace_catalog(cmd.clone())),
            MachineCommand::Buy(cmd) => self.handle_buy(cmd),
        }
    }
}

impl VendingMachine {
    fn handle_replace_catalog(&self, cmd: ReplaceCatalog) -> Vec<MachineEvent> {
        vec![MachineEvent::CatalogReplaced(CatalogReplaced {
            machine_id: self.id,
            items: cmd.items,
            occurred_at: cmd.occurred_at,
        })]
    }

    fn handle_insert_coin(&self, cmd: &InsertCoin) -> VendingResult<Vec<MachineEvent>> {
        if !self.config.coins.accepts(&cmd.coin) {
            return Err(VendingError::unacceptable_coin(cmd.coin));
        }

        Ok(vec![MachineEvent::CoinInserted(CoinInserted {
            machine_id: self.id,
            coin: cmd.coin,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_buy(&self, cmd: &Buy) -> VendingResult<Vec<MachineEvent>> {
        let items = self.catalog.as_deref().ok_or(VendingError::EmptyCatalog)?;
        let item = items
            .get(cmd.slot.get())
            .ok_or(VendingError::not_listed(cmd.slot))?;

        if !item.is_in_stock() {
            return Err(VendingError::out_of_stock(cmd.slot));
        }

        if !self.balance.covers(&item.price()) {
            return Err(VendingError::insufficient_funds(item.price(), self.balance));
        }

        Ok(vec![MachineEvent::ItemVended(ItemVended {
            machine_id: self.id,
            slot: cmd.slot,
            name: item.name().to_string(),
            price: item.price(),
            occurred_at: cmd.occurred_at,
        })])
    }
}
