mod client;
mod coiffeur;
mod creneau;
mod reservation;
mod salon;

pub use client::*;
pub use coiffeur::*;
pub use creneau::*;
pub use reservation::*;
pub use salon::*;
