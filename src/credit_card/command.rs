pub enum CreditCardCommand {
    Deposit { amount: i32 },
    Charge { amount: i32 },
}
