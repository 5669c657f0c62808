//! Operator-facing strings, keyed by message id. The rest of the crate only
//! deals in [`Msg`] values; text is looked up here at the console boundary so
//! the core logic stays language-neutral.

/// Placeholder replaced by [`Catalog::format`] with the caller's argument.
const ARG: &str = "{}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Russian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    MenuAdd,
    MenuList,
    MenuDelete,
    MenuUpdate,
    MenuExit,
    ChooseAction,
    InvalidChoice,

    NotAnInteger,
    NotANumber,
    /// Takes the upper year bound.
    YearOutOfRange,

    PromptId,
    PromptName,
    PromptPrice,
    PromptQuantity,
    PromptYear,
    PromptDeleteId,
    PromptUpdateId,
    PromptNewName,
    PromptNewPrice,
    PromptNewQuantity,
    PromptNewYear,

    DuplicateId,
    ItemAdded,
    ItemDeleted,
    ItemUpdated,
    ItemNotFound,

    /// The failure messages below take the underlying cause.
    SchemaFailed,
    AddFailed,
    ListFailed,
    DeleteFailed,
    UpdateFailed,
}

#[cfg(test)]
impl Msg {
    /// Every message id, used to check that each catalog is complete.
    pub const ALL: &'static [Msg] = &[
        Msg::MenuAdd,
        Msg::MenuList,
        Msg::MenuDelete,
        Msg::MenuUpdate,
        Msg::MenuExit,
        Msg::ChooseAction,
        Msg::InvalidChoice,
        Msg::NotAnInteger,
        Msg::NotANumber,
        Msg::YearOutOfRange,
        Msg::PromptId,
        Msg::PromptName,
        Msg::PromptPrice,
        Msg::PromptQuantity,
        Msg::PromptYear,
        Msg::PromptDeleteId,
        Msg::PromptUpdateId,
        Msg::PromptNewName,
        Msg::PromptNewPrice,
        Msg::PromptNewQuantity,
        Msg::PromptNewYear,
        Msg::DuplicateId,
        Msg::ItemAdded,
        Msg::ItemDeleted,
        Msg::ItemUpdated,
        Msg::ItemNotFound,
        Msg::SchemaFailed,
        Msg::AddFailed,
        Msg::ListFailed,
        Msg::DeleteFailed,
        Msg::UpdateFailed,
    ];
}

/// Message table for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    language: Language,
}

impl Catalog {
    /// Table for `language`.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Raw text for `msg`. Parameterised messages keep their `{}` slot.
    pub fn text(&self, msg: Msg) -> &'static str {
        match self.language {
            Language::English => english(msg),
            Language::Russian => russian(msg),
        }
    }

    /// Text for `msg` with its `{}` slot filled by `arg`.
    pub fn format(&self, msg: Msg, arg: impl std::fmt::Display) -> String {
        self.text(msg).replacen(ARG, &arg.to_string(), 1)
    }
}

fn english(msg: Msg) -> &'static str {
    match msg {
        Msg::MenuAdd => "1. Add item",
        Msg::MenuList => "2. Show all",
        Msg::MenuDelete => "3. Delete item",
        Msg::MenuUpdate => "4. Update item",
        Msg::MenuExit => "0. Exit",
        Msg::ChooseAction => "Choose action: ",
        Msg::InvalidChoice => "Invalid choice.",
        Msg::NotAnInteger => "Please enter a whole number.",
        Msg::NotANumber => "Please enter a number.",
        Msg::YearOutOfRange => "Enter a valid year (from 1900 to {}).",
        Msg::PromptId => "Item ID: ",
        Msg::PromptName => "Name: ",
        Msg::PromptPrice => "Price: ",
        Msg::PromptQuantity => "Quantity: ",
        Msg::PromptYear => "Release year: ",
        Msg::PromptDeleteId => "Item ID to delete: ",
        Msg::PromptUpdateId => "Item ID to update: ",
        Msg::PromptNewName => "New name: ",
        Msg::PromptNewPrice => "New price: ",
        Msg::PromptNewQuantity => "New quantity: ",
        Msg::PromptNewYear => "New release year: ",
        Msg::DuplicateId => "An item with this ID already exists.",
        Msg::ItemAdded => "Item added.",
        Msg::ItemDeleted => "Item deleted.",
        Msg::ItemUpdated => "Item updated.",
        Msg::ItemNotFound => "Item not found.",
        Msg::SchemaFailed => "Database initialization error: {}",
        Msg::AddFailed => "Failed to add item: {}",
        Msg::ListFailed => "Failed to read items: {}",
        Msg::DeleteFailed => "Failed to delete item: {}",
        Msg::UpdateFailed => "Failed to update item: {}",
    }
}

fn russian(msg: Msg) -> &'static str {
    match msg {
        Msg::MenuAdd => "1. Добавить товар",
        Msg::MenuList => "2. Показать все",
        Msg::MenuDelete => "3. Удалить товар",
        Msg::MenuUpdate => "4. Обновить товар",
        Msg::MenuExit => "0. Выход",
        Msg::ChooseAction => "Выберите действие: ",
        Msg::InvalidChoice => "Неверный выбор.",
        Msg::NotAnInteger => "Пожалуйста, введите целое число.",
        Msg::NotANumber => "Пожалуйста, введите число.",
        Msg::YearOutOfRange => "Введите корректный год (от 1900 до {}).",
        Msg::PromptId => "ID товара: ",
        Msg::PromptName => "Название: ",
        Msg::PromptPrice => "Стоимость: ",
        Msg::PromptQuantity => "Количество: ",
        Msg::PromptYear => "Год выпуска: ",
        Msg::PromptDeleteId => "ID товара для удаления: ",
        Msg::PromptUpdateId => "ID товара для обновления: ",
        Msg::PromptNewName => "Новое название: ",
        Msg::PromptNewPrice => "Новая стоимость: ",
        Msg::PromptNewQuantity => "Новое количество: ",
        Msg::PromptNewYear => "Новый год выпуска: ",
        Msg::DuplicateId => "Товар с таким ID уже существует.",
        Msg::ItemAdded => "Товар добавлен.",
        Msg::ItemDeleted => "Товар удалён.",
        Msg::ItemUpdated => "Товар обновлён.",
        Msg::ItemNotFound => "Товар не найден.",
        Msg::SchemaFailed => "Ошибка инициализации БД: {}",
        Msg::AddFailed => "Ошибка добавления: {}",
        Msg::ListFailed => "Ошибка чтения: {}",
        Msg::DeleteFailed => "Ошибка удаления: {}",
        Msg::UpdateFailed => "Ошибка обновления: {}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMETERISED: &[Msg] = &[
        Msg::YearOutOfRange,
        Msg::SchemaFailed,
        Msg::AddFailed,
        Msg::ListFailed,
        Msg::DeleteFailed,
        Msg::UpdateFailed,
    ];

    #[test]
    fn every_catalog_has_text_for_every_message() {
        for language in [Language::English, Language::Russian] {
            let catalog = Catalog::new(language);
            for &msg in Msg::ALL {
                assert!(!catalog.text(msg).is_empty(), "{language:?} {msg:?}");
            }
        }
    }

    #[test]
    fn argument_slots_match_across_languages() {
        for language in [Language::English, Language::Russian] {
            let catalog = Catalog::new(language);
            for &msg in Msg::ALL {
                let has_slot = catalog.text(msg).contains(ARG);
                assert_eq!(
                    has_slot,
                    PARAMETERISED.contains(&msg),
                    "{language:?} {msg:?}"
                );
            }
        }
    }

    #[test]
    fn format_fills_the_slot() {
        let catalog = Catalog::new(Language::English);
        assert_eq!(
            catalog.format(Msg::YearOutOfRange, 2026),
            "Enter a valid year (from 1900 to 2026)."
        );
    }
}
