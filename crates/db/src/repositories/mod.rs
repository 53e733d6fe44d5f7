//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod channel;
pub mod expense;
pub mod person;
pub mod reservation;
pub mod setting;

pub use channel::{ChannelError, ChannelRepository};
pub use expense::{CreateExpenseInput, ExpenseError, ExpenseRepository, UpdateExpenseInput};
pub use person::{
    CreatePersonInput, PersonError, PersonRepository, SearchPeopleParams, UpdatePersonInput,
};
pub use reservation::{ReservationError, ReservationRepository};
pub use setting::{SettingError, SettingRepository};
