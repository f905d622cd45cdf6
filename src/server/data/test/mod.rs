mod account;
mod link;
mod reference;
