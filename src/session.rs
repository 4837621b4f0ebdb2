//! The operator session: one menu selection, one operation, one save.
//!
//! A session loads the inventory at start, reads a single operation label,
//! collects the operation's fields through its [`PromptSource`], dispatches
//! to the command layer, and persists the collection after any mutation.
//! There is no loop back to the menu; each invocation performs exactly one
//! operation.

use crate::commands::{self, CmdMessage, CmdResult, ProductFields};
use crate::error::{InventoryError, Result};
use crate::model::Inventory;
use crate::price;
use crate::prompt::PromptSource;
use crate::store::InventoryStore;
use std::str::FromStr;

/// The six menu operations, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Show,
    Create,
    Update,
    Destroy,
    Reset,
}

impl Operation {
    pub const LABELS: [&'static str; 6] =
        ["List", "Show", "Create", "Update", "Destroy", "Reset"];
}

impl FromStr for Operation {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(Operation::List),
            "show" => Ok(Operation::Show),
            "create" => Ok(Operation::Create),
            "update" => Ok(Operation::Update),
            "destroy" => Ok(Operation::Destroy),
            "reset" => Ok(Operation::Reset),
            _ => Err(()),
        }
    }
}

/// How long validation loops re-prompt. The interactive default re-prompts
/// indefinitely; batch harnesses can bound the number of answers considered
/// before the loop gives up with [`InventoryError::PromptExhausted`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptPolicy {
    max_attempts: Option<usize>,
}

impl PromptPolicy {
    pub fn interactive() -> Self {
        Self { max_attempts: None }
    }

    pub fn bounded(max_attempts: usize) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    fn exhausted(&self, attempts: usize) -> bool {
        matches!(self.max_attempts, Some(max) if attempts >= max)
    }
}

pub struct Session<S: InventoryStore, P: PromptSource> {
    store: S,
    prompter: P,
    policy: PromptPolicy,
    inventory: Inventory,
}

impl<S: InventoryStore, P: PromptSource> Session<S, P> {
    /// Loads the inventory from the store. A missing or malformed store file
    /// fails here; the session cannot proceed without its data.
    pub fn start(store: S, prompter: P, policy: PromptPolicy) -> Result<Self> {
        let inventory = store.load()?;
        Ok(Self {
            store,
            prompter,
            policy,
            inventory,
        })
    }

    pub fn product_count(&self) -> usize {
        self.inventory.len()
    }

    /// Reads one operation selection and performs it. Mutating operations
    /// save before returning; an unrecognized label is a no-op with a
    /// guidance message, never an error.
    pub fn run(&mut self) -> Result<CmdResult> {
        let choice = self.prompter.read_line("Please select an operation: ")?;
        match choice.trim().parse::<Operation>() {
            Ok(operation) => self.dispatch(operation),
            Err(()) => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::warning(format!(
                    "Sorry, the operation you selected is not recognized. \
                     Please select one of the following: {}.",
                    Operation::LABELS
                        .map(|l| format!("'{}'", l))
                        .join(", ")
                )));
                Ok(result)
            }
        }
    }

    fn dispatch(&mut self, operation: Operation) -> Result<CmdResult> {
        match operation {
            Operation::List => Ok(commands::list::run(&self.inventory)),
            Operation::Show => {
                let id = self.prompt_existing_id("Ok. Please provide Product ID: ")?;
                commands::show::run(&self.inventory, &id)
            }
            Operation::Create => {
                let fields = self.collect_fields(
                    "Ok. Please provide the name of the new product: ",
                    "Ok. Please provide the aisle of the new product: ",
                    "Ok. Please provide the department of the new product: ",
                    "Ok. Please provide the price of the new product: ",
                )?;
                let result = commands::create::run(&mut self.inventory, fields)?;
                self.store.save(&self.inventory)?;
                Ok(result)
            }
            Operation::Update => {
                let id = self.prompt_existing_id(
                    "Ok. Please provide the ID of the product you want to update: ",
                )?;
                let fields = self.collect_fields(
                    "Ok. What is the product's new name? ",
                    "Ok. What is the product's new aisle? ",
                    "Ok. What is the product's new department? ",
                    "Ok. What is the product's new price? ",
                )?;
                let result = commands::update::run(&mut self.inventory, &id, fields)?;
                self.store.save(&self.inventory)?;
                Ok(result)
            }
            Operation::Destroy => {
                let id = self
                    .prompt_existing_id("What is the ID of the product that you want to destroy? ")?;
                let result = commands::destroy::run(&mut self.inventory, &id)?;
                self.store.save(&self.inventory)?;
                Ok(result)
            }
            Operation::Reset => {
                self.store.reset()?;
                // The in-memory collection is stale now; the session ends
                // without the normal save path.
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::info("RESETTING DEFAULTS"));
                Ok(result)
            }
        }
    }

    fn collect_fields(
        &mut self,
        name_prompt: &str,
        aisle_prompt: &str,
        department_prompt: &str,
        price_prompt: &str,
    ) -> Result<ProductFields> {
        let name = self.prompter.read_line(name_prompt)?;
        let aisle = self.prompter.read_line(aisle_prompt)?;
        let department = self.prompter.read_line(department_prompt)?;
        let price = self.prompt_price(price_prompt)?;
        Ok(ProductFields::new(name, aisle, department, price))
    }

    /// Re-prompts until the supplied id exists in the collection.
    fn prompt_existing_id(&mut self, initial_prompt: &str) -> Result<String> {
        let mut id = self.prompter.read_line(initial_prompt)?;
        let mut attempts = 1;
        while !self.inventory.contains_id(id.trim()) {
            if self.policy.exhausted(attempts) {
                return Err(InventoryError::PromptExhausted);
            }
            id = self
                .prompter
                .read_line("Product ID Not Found. Please provide valid product ID: ")?;
            attempts += 1;
        }
        Ok(id.trim().to_string())
    }

    /// Re-prompts until the supplied price passes the `x.xx` format rule.
    fn prompt_price(&mut self, initial_prompt: &str) -> Result<String> {
        let mut candidate = self.prompter.read_line(initial_prompt)?;
        let mut attempts = 1;
        loop {
            match price::validate(&candidate) {
                Ok(price) => return Ok(price),
                Err(_) if self.policy.exhausted(attempts) => {
                    return Err(InventoryError::PromptExhausted)
                }
                Err(_) => {
                    candidate = self.prompter.read_line(
                        "PRICE NOT IN 'x.xx' FORMAT. PLEASE PROVIDE PRICE IN 'x.xx' FORMAT: ",
                    )?;
                    attempts += 1;
                }
            }
        }
    }
}
