mod common;
mod health;
mod scoreboard;
mod workshop;
