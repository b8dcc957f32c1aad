mod admin_crud;
mod pages;
mod session_gate;
