mod calc;
mod yahoo;
mod yahoo_dto;
