//! Bank account ledger shell

use crate::core::Bank;
use crate::shell::{advise, Console, Menu, ShellError};
use crate::types::{to_cents, AccountNumber, StoreError};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::path::Path;

/// Menu front end over a [`Bank`]
#[derive(Debug, Default)]
pub struct BankShell {
    bank: Bank,
}

impl BankShell {
    pub fn new() -> Self {
        BankShell { bank: Bank::new() }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }
}

/// Advisory text for a non-fatal store error
fn describe(error: &StoreError) -> String {
    match error {
        StoreError::EmptyStore => "No accounts found.".to_string(),
        StoreError::RecordNotFound { .. } => "Account not found.".to_string(),
        StoreError::InsufficientFunds { .. } => "Insufficient funds.".to_string(),
        StoreError::ArithmeticOverflow { .. } => "Amount out of range.".to_string(),
        StoreError::FileOpen { .. } => "Failed to open file.".to_string(),
        other => format!("Error: {}", other),
    }
}

fn report<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    error: StoreError,
) -> Result<(), ShellError> {
    let message = describe(&error);
    advise(console, error, &message)
}

impl Menu for BankShell {
    const TITLE: &'static str = "Bank Management System";
    const ENTRIES: &'static [&'static str] = &[
        "Create Account",
        "Deposit Money",
        "Withdraw Money",
        "Check Balance",
        "Delete Account",
        "Display All Accounts",
        "Save Accounts to File",
        "Load Accounts from File",
        "Exit",
    ];

    fn dispatch<I, O>(
        &mut self,
        choice: usize,
        console: &mut Console<I, O>,
        data_file: &Path,
    ) -> Result<(), ShellError>
    where
        I: BufRead,
        O: Write,
    {
        match choice {
            1 => self.create(console),
            2 => self.deposit(console),
            3 => self.withdraw(console),
            4 => self.check_balance(console),
            5 => self.delete(console),
            6 => self.display(console),
            7 => self.save(console, data_file),
            8 => self.load(console, data_file),
            _ => console.say("Invalid choice. Please try again."),
        }
    }
}

impl BankShell {
    fn ask_number<I: BufRead, O: Write>(
        console: &mut Console<I, O>,
    ) -> Result<Option<AccountNumber>, ShellError> {
        console.ask("Enter Account Number: ")
    }

    fn create<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> Result<(), ShellError> {
        let Some(number) = Self::ask_number(console)? else {
            return Ok(());
        };
        let name = console.ask_text("Enter Name: ")?;
        let Some(initial) = console.ask::<Decimal>("Enter Initial Deposit: ")? else {
            return Ok(());
        };

        match self.bank.open_account(number, name, initial) {
            Ok(()) => console.say("Account created successfully."),
            Err(e) => report(console, e),
        }
    }

    fn deposit<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> Result<(), ShellError> {
        let Some(number) = Self::ask_number(console)? else {
            return Ok(());
        };
        let Some(amount) = console.ask::<Decimal>("Enter Amount to Deposit: ")? else {
            return Ok(());
        };

        match self.bank.deposit(number, amount) {
            Ok(balance) => console.say(format!(
                "Deposited {:.2} successfully. New balance: {:.2}",
                to_cents(amount),
                to_cents(balance)
            )),
            Err(e) => report(console, e),
        }
    }

    fn withdraw<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> Result<(), ShellError> {
        let Some(number) = Self::ask_number(console)? else {
            return Ok(());
        };
        let Some(amount) = console.ask::<Decimal>("Enter Amount to Withdraw: ")? else {
            return Ok(());
        };

        match self.bank.withdraw(number, amount) {
            Ok(balance) => console.say(format!(
                "Withdrawn {:.2} successfully. New balance: {:.2}",
                to_cents(amount),
                to_cents(balance)
            )),
            Err(e) => report(console, e),
        }
    }

    fn check_balance<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> Result<(), ShellError> {
        let Some(number) = Self::ask_number(console)? else {
            return Ok(());
        };

        match self.bank.balance(number) {
            Ok(balance) => console.say(format!(
                "Account Balance for {}: {:.2}",
                number,
                to_cents(balance)
            )),
            Err(e) => report(console, e),
        }
    }

    fn delete<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> Result<(), ShellError> {
        let Some(number) = Self::ask_number(console)? else {
            return Ok(());
        };

        match self.bank.close_account(number) {
            Ok(_) => console.say("Account deleted successfully."),
            Err(e) => report(console, e),
        }
    }

    fn display<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> Result<(), ShellError> {
        let accounts = self.bank.accounts();
        if accounts.is_empty() {
            return report(console, StoreError::EmptyStore);
        }

        console.say("")?;
        console.say("--- List of Accounts ---")?;
        for account in accounts {
            console.say(format!(
                "Account Number: {}, Name: {}, Balance: {:.2}",
                account.number,
                account.name,
                to_cents(account.balance)
            ))?;
        }
        Ok(())
    }

    fn save<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
        path: &Path,
    ) -> Result<(), ShellError> {
        match self.bank.save(path) {
            Ok(_) => console.say("Accounts saved to file successfully."),
            Err(e) => report(console, e),
        }
    }

    fn load<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
        path: &Path,
    ) -> Result<(), ShellError> {
        match self.bank.load(path) {
            Ok(_) => console.say("Accounts loaded from file successfully."),
            Err(e) => report(console, e),
        }
    }
}
