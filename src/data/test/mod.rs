mod guild;
mod member;
mod role_list;
mod ticket;
mod ticket_bot;
mod ticket_type;
