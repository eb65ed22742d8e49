mod common;
mod conversation;
mod routing;
