//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod reservation_command;
mod reservation_repository;
mod table_command;
mod table_repository;

#[cfg(test)]
pub use reservation_command::{MockReservationCommand, MockReservationQuery};
pub use reservation_command::{CreateReservationRequest, ReservationCommand, ReservationQuery};
#[cfg(test)]
pub use reservation_repository::MockReservationRepository;
pub use reservation_repository::{ReservationRepository, ReservationRepositoryError};
#[cfg(test)]
pub use table_command::{MockTableCommand, MockTableQuery};
pub use table_command::{CreateTableRequest, TableCommand, TableQuery};
#[cfg(test)]
pub use table_repository::MockTableRepository;
pub use table_repository::{TableRepository, TableRepositoryError};
