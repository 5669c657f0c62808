//! The menu loop. Each numbered choice collects its arguments through the
//! [`Prompter`], runs one repository operation and reports the outcome. A
//! failing command prints its error and the menu comes back; nothing short of
//! choosing exit (or closing input) ends the loop.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Error, Result};

use crate::db::{RepoError, Store};
use crate::input::Prompter;
use crate::messages::Msg;
use crate::models::{Item, ItemFields};

const MENU: &[Msg] = &[
    Msg::MenuAdd,
    Msg::MenuList,
    Msg::MenuDelete,
    Msg::MenuUpdate,
    Msg::MenuExit,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Console<R, W> {
    store: Store,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(store: Store, prompter: Prompter<R, W>) -> Self {
        Self { store, prompter }
    }

    /// Show the menu and dispatch choices until the operator exits. Closed
    /// input counts as exit.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let choice = match self.show_menu() {
                Ok(choice) => choice,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    log::info!("input closed, leaving menu");
                    return Ok(());
                }
                Err(err) => return Err(err),
            };

            match self.dispatch(&choice) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    log::info!("input closed mid-command, leaving menu");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<String> {
        let catalog = self.prompter.catalog();
        for &entry in MENU {
            self.prompter.say(catalog.text(entry))?;
        }
        self.prompter.read_line(catalog.text(Msg::ChooseAction))
    }

    /// Run the command for one menu choice. The choice must match exactly;
    /// `" 1"` is an invalid choice.
    pub fn dispatch(&mut self, choice: &str) -> io::Result<Flow> {
        log::debug!("menu choice {choice:?}");
        match choice {
            "1" => self.guarded(Msg::AddFailed, Self::add_item)?,
            "2" => self.guarded(Msg::ListFailed, Self::list_items)?,
            "3" => self.guarded(Msg::DeleteFailed, Self::delete_item)?,
            "4" => self.guarded(Msg::UpdateFailed, Self::update_item)?,
            "0" => return Ok(Flow::Exit),
            _ => self.report(Msg::InvalidChoice)?,
        }
        Ok(Flow::Continue)
    }

    /// Command boundary. Console I/O errors pass through so the loop can stop;
    /// anything else is printed under `failure` and swallowed.
    fn guarded(&mut self, failure: Msg, command: fn(&mut Self) -> Result<()>) -> io::Result<()> {
        let Err(err) = command(self) else {
            return Ok(());
        };
        match err.downcast::<io::Error>() {
            Ok(io_err) => Err(io_err),
            Err(err) => {
                log::warn!("{failure:?}: {err:#}");
                let text = self.prompter.catalog().format(failure, surface_error(&err));
                self.prompter.say(&text)
            }
        }
    }

    fn report(&mut self, msg: Msg) -> io::Result<()> {
        let text = self.prompter.catalog().text(msg);
        self.prompter.say(text)
    }

    fn add_item(&mut self) -> Result<()> {
        let catalog = self.prompter.catalog();
        let id = self.prompter.read_int(catalog.text(Msg::PromptId))?;
        if self.store.exists(id).context("failed to look up item id")? {
            self.report(Msg::DuplicateId)?;
            return Ok(());
        }

        let fields = self.read_fields(
            Msg::PromptName,
            Msg::PromptPrice,
            Msg::PromptQuantity,
            Msg::PromptYear,
        )?;
        match self.store.insert(&fields.with_id(id)) {
            Ok(()) => self.report(Msg::ItemAdded)?,
            Err(RepoError::DuplicateKey(_)) => self.report(Msg::DuplicateId)?,
            Err(err) => return Err(Error::new(err).context("failed to insert item")),
        }
        Ok(())
    }

    fn list_items(&mut self) -> Result<()> {
        let items: Vec<Item> = self.store.find_all().context("failed to load items")?;
        for item in &items {
            self.prompter.say(&item.to_string())?;
        }
        Ok(())
    }

    fn delete_item(&mut self) -> Result<()> {
        let catalog = self.prompter.catalog();
        let id = self.prompter.read_int(catalog.text(Msg::PromptDeleteId))?;
        let removed = self.store.delete(id).context("failed to delete item")?;
        self.report(if removed {
            Msg::ItemDeleted
        } else {
            Msg::ItemNotFound
        })?;
        Ok(())
    }

    fn update_item(&mut self) -> Result<()> {
        let catalog = self.prompter.catalog();
        let id = self.prompter.read_int(catalog.text(Msg::PromptUpdateId))?;
        match self.store.find(id) {
            Ok(_) => {}
            Err(RepoError::NotFound(_)) => {
                self.report(Msg::ItemNotFound)?;
                return Ok(());
            }
            Err(err) => return Err(Error::new(err).context("failed to look up item")),
        }

        let fields = self.read_fields(
            Msg::PromptNewName,
            Msg::PromptNewPrice,
            Msg::PromptNewQuantity,
            Msg::PromptNewYear,
        )?;
        match self.store.update(id, &fields) {
            Ok(()) => self.report(Msg::ItemUpdated)?,
            Err(RepoError::NotFound(_)) => self.report(Msg::ItemNotFound)?,
            Err(err) => return Err(Error::new(err).context("failed to update item")),
        }
        Ok(())
    }

    fn read_fields(
        &mut self,
        name: Msg,
        price: Msg,
        quantity: Msg,
        year: Msg,
    ) -> io::Result<ItemFields> {
        let catalog = self.prompter.catalog();
        Ok(ItemFields {
            name: self.prompter.read_line(catalog.text(name))?,
            price: self.prompter.read_float(catalog.text(price))?,
            quantity: self.prompter.read_int(catalog.text(quantity))?,
            release_year: self.prompter.read_year(catalog.text(year))?,
        })
    }
}

/// Extract the most relevant error message from a chained error. SQLite
/// errors are shown at their own level; their sources only carry a bare
/// result code.
pub fn surface_error(err: &Error) -> String {
    if let Some(repo) = err.downcast_ref::<RepoError>() {
        return repo.to_string();
    }
    if let Some(sql) = err.downcast_ref::<rusqlite::Error>() {
        return sql.to_string();
    }
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use std::io;

    use anyhow::anyhow;

    use super::*;

    #[test]
    fn surface_error_prefers_repository_message() {
        let err = Error::new(RepoError::NotFound(3)).context("failed to look up item");
        assert_eq!(surface_error(&err), "item 3 not found");
    }

    #[test]
    fn surface_error_falls_back_to_root_cause() {
        let err = Error::new(io::Error::other("disk full")).context("outer");
        assert_eq!(surface_error(&err), "disk full");

        let plain = anyhow!("only message");
        assert_eq!(surface_error(&plain), "only message");
    }
}
