//! Plain-text operator console
//!
//! Presents the numbered menu, collects operator input line by line, calls
//! into [`GymState`] and renders the results. No colours and no screen
//! clearing; output is plain lines so that scripted sessions can be checked.
//!
//! # Input Rules
//!
//! - Invalid age or unknown package while adding a member: re-prompt
//! - Unknown package while renewing: re-prompt
//! - Unknown member id: report "Member not found!" and return to the menu
//! - Non-numeric payment amount: report it and return to the menu before
//!   asking for the method
//! - End of input at any prompt: the session ends without saving
//! - Saving fails: the error is shown and the menu returns with the session
//!   intact

use crate::core::normalize::{normalize_member_id, parse_age, parse_amount, title_case};
use crate::core::{Clock, GymReport, GymState, NewMember};
use crate::io::{save_state, DataFiles};
use crate::types::{GymError, Member};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

const RULE_WIDTH: usize = 70;

/// How a console session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Operator chose "Save & Exit" and the files were written
    Saved,
    /// Operator confirmed "Exit Without Saving"
    Discarded,
    /// Input stream ended; nothing was saved
    InputClosed,
}

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddMember,
    ViewAll,
    Search,
    Update,
    Renew,
    RecordPayment,
    Report,
    SaveAndExit,
    ExitWithoutSaving,
}

impl MenuChoice {
    /// Map the operator's menu input to a choice
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddMember),
            "2" => Some(MenuChoice::ViewAll),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Update),
            "5" => Some(MenuChoice::Renew),
            "6" => Some(MenuChoice::RecordPayment),
            "7" => Some(MenuChoice::Report),
            "8" => Some(MenuChoice::SaveAndExit),
            "0" => Some(MenuChoice::ExitWithoutSaving),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    End(SessionEnd),
}

/// Interactive console over any line-oriented input and output
pub struct Console<R, W> {
    state: GymState,
    files: DataFiles,
    clock: Box<dyn Clock>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(
        state: GymState,
        files: DataFiles,
        clock: Box<dyn Clock>,
        input: R,
        output: W,
    ) -> Self {
        Console {
            state,
            files,
            clock,
            input,
            output,
        }
    }

    /// Consume the console, returning the final state and the output sink
    pub fn into_parts(self) -> (GymState, W) {
        (self.state, self.output)
    }

    /// Run the menu loop until the operator exits or input ends
    ///
    /// # Errors
    ///
    /// Returns `Io` if the console cannot be written or read. Operator
    /// mistakes and failed saves never end the loop.
    pub fn run(&mut self) -> Result<SessionEnd, GymError> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("\n   Enter your choice (0-8): ")? else {
                return Ok(SessionEnd::InputClosed);
            };

            let flow = match MenuChoice::parse(&line) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    tracing::warn!(input = %line, "invalid menu choice");
                    writeln!(self.output, "Invalid choice! Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::End(end) = flow {
                tracing::info!(?end, "session ended");
                return Ok(end);
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow, GymError> {
        match choice {
            MenuChoice::AddMember => self.add_member(),
            MenuChoice::ViewAll => self.view_members().map(|_| Flow::Continue),
            MenuChoice::Search => self.search_members(),
            MenuChoice::Update => self.update_member(),
            MenuChoice::Renew => self.renew_membership(),
            MenuChoice::RecordPayment => self.record_payment(),
            MenuChoice::Report => self.show_report().map(|_| Flow::Continue),
            MenuChoice::SaveAndExit => self.save_and_exit(),
            MenuChoice::ExitWithoutSaving => self.exit_without_saving(),
        }
    }

    /// Print `text` and read one line, trimmed; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>, GymError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Show a recoverable error inline; anything else ends the session
    fn report_error(&mut self, error: &GymError) -> Result<(), GymError> {
        if !error.is_recoverable() {
            return Err(error.clone());
        }
        tracing::warn!(%error, "operation rejected");
        writeln!(self.output, "{}", error)?;
        Ok(())
    }

    fn print_header(&mut self, title: &str) -> Result<(), GymError> {
        writeln!(self.output)?;
        writeln!(self.output, "{:^width$}", title, width = RULE_WIDTH)?;
        writeln!(self.output, "{}", "-".repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), GymError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.output, "{:^width$}", "GYM MANAGEMENT SYSTEM", width = RULE_WIDTH)?;
        writeln!(self.output, "{}", "=".repeat(RULE_WIDTH))?;
        for entry in [
            "1. Add New Member",
            "2. View All Members",
            "3. Search Member",
            "4. Update Member Details",
            "5. Renew Membership",
            "6. Record Payment",
            "7. Generate Gym Report",
            "8. Save & Exit",
            "0. Exit Without Saving",
        ] {
            writeln!(self.output, "  {}", entry)?;
        }
        writeln!(self.output, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn print_packages(&mut self, numbered: bool) -> Result<(), GymError> {
        for (i, package) in self.state.catalog().packages().iter().enumerate() {
            if numbered {
                writeln!(self.output, "  {}. {} - Rs. {}", i + 1, package.name, package.price)?;
            } else {
                writeln!(self.output, "  {} - Rs. {}", package.name, package.price)?;
            }
        }
        Ok(())
    }

    /// Keep asking until the operator names a package in the catalog
    fn prompt_package(&mut self, text: &str, invalid: &str) -> Result<Option<String>, GymError> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            let name = title_case(&line);
            if self.state.catalog().contains(&name) {
                return Ok(Some(name));
            }
            tracing::warn!(package = %name, "unknown package");
            writeln!(self.output, "{}", invalid)?;
        }
    }

    /// Ask for a member id and resolve it, reporting when it does not exist
    fn prompt_member(&mut self, text: &str) -> Result<Option<Option<Member>>, GymError> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };
        let id = normalize_member_id(&line);

        match self.state.find_member(&id).cloned() {
            Some(member) => Ok(Some(Some(member))),
            None => {
                tracing::warn!(member_id = %id, "member not found");
                writeln!(self.output, "Member not found!")?;
                Ok(Some(None))
            }
        }
    }

    fn add_member(&mut self) -> Result<Flow, GymError> {
        self.print_header("ADD NEW MEMBER")?;

        if self.state.catalog().is_empty() {
            writeln!(self.output, "No packages available!")?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.prompt("Enter member name: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };

        let age = loop {
            let Some(line) = self.prompt("Enter age: ")? else {
                return Ok(Flow::End(SessionEnd::InputClosed));
            };
            match parse_age(&line) {
                Ok(age) => break age,
                Err(e) => self.report_error(&e)?,
            }
        };

        let Some(contact) = self.prompt("Enter contact number: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };

        writeln!(self.output, "\nAvailable Packages:")?;
        self.print_packages(true)?;

        let Some(package) = self.prompt_package(
            "\nChoose package by name: ",
            "Invalid package! Choose from the list.",
        )?
        else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };

        let today = self.clock.today();
        let result = self
            .state
            .add_member(NewMember { name, age, contact }, &package, today)
            .map(|member| member.id);

        match result {
            Ok(id) => writeln!(self.output, "\nMember added successfully! ID: {}", id)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn view_members(&mut self) -> Result<(), GymError> {
        self.print_header("ALL MEMBERS")?;

        if self.state.registry().is_empty() {
            writeln!(self.output, "No members registered yet!")?;
            return Ok(());
        }

        let today = self.clock.today();
        writeln!(
            self.output,
            "{:<6} {:<18} {:<5} {:<15} {:<15} {:<12} {:<12} Status",
            "ID", "Name", "Age", "Contact", "Package", "Join Date", "Expiry"
        )?;
        writeln!(self.output, "{}", "-".repeat(100))?;

        for member in self.state.registry().members() {
            writeln!(
                self.output,
                "{:<6} {:<18} {:<5} {:<15} {:<15} {:<12} {:<12} {}",
                member.id,
                member.name,
                member.age,
                member.contact,
                member.package,
                member.join_date.to_string(),
                member.expiry.to_string(),
                member.status(today)
            )?;
        }
        Ok(())
    }

    fn write_search_results(&mut self, found: &[Member], today: NaiveDate) -> Result<(), GymError> {
        writeln!(
            self.output,
            "{:<6} {:<18} {:<15} {:<15} {:<12} Status",
            "ID", "Name", "Contact", "Package", "Expiry"
        )?;
        writeln!(self.output, "{}", "-".repeat(85))?;
        for member in found {
            writeln!(
                self.output,
                "{:<6} {:<18} {:<15} {:<15} {:<12} {}",
                member.id,
                member.name,
                member.contact,
                member.package,
                member.expiry.to_string(),
                member.status(today)
            )?;
        }
        Ok(())
    }

    fn search_members(&mut self) -> Result<Flow, GymError> {
        self.print_header("SEARCH MEMBER")?;

        if self.state.registry().is_empty() {
            writeln!(self.output, "No members to search!")?;
            return Ok(Flow::Continue);
        }

        let Some(query) = self.prompt("Enter Member ID or Name: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };

        let found: Vec<Member> = self
            .state
            .search_members(&query)
            .into_iter()
            .cloned()
            .collect();

        if found.is_empty() {
            writeln!(self.output, "No member found!")?;
        } else {
            let today = self.clock.today();
            self.write_search_results(&found, today)?;
        }
        Ok(Flow::Continue)
    }

    fn update_member(&mut self) -> Result<Flow, GymError> {
        self.print_header("UPDATE MEMBER")?;

        let member = match self.prompt_member("Enter Member ID to update: ")? {
            None => return Ok(Flow::End(SessionEnd::InputClosed)),
            Some(None) => return Ok(Flow::Continue),
            Some(Some(member)) => member,
        };

        writeln!(self.output, "\nCurrent Details: {} ({})", member.name, member.id)?;
        writeln!(self.output, "Leave blank to keep current value.")?;

        let Some(new_name) = self.prompt(&format!("New name [{}]: ", member.name))? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };
        let Some(new_contact) = self.prompt(&format!("New contact [{}]: ", member.contact))? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };

        let result = self
            .state
            .update_member(&member.id, Some(&new_name), Some(&new_contact))
            .map(|_| ());

        match result {
            Ok(()) => writeln!(self.output, "Member updated successfully!")?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn renew_membership(&mut self) -> Result<Flow, GymError> {
        self.print_header("RENEW MEMBERSHIP")?;

        let member = match self.prompt_member("Enter Member ID to renew: ")? {
            None => return Ok(Flow::End(SessionEnd::InputClosed)),
            Some(None) => return Ok(Flow::Continue),
            Some(Some(member)) => member,
        };

        if self.state.catalog().is_empty() {
            writeln!(self.output, "No packages available!")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\nRenewing for: {} ({})", member.name, member.id)?;
        writeln!(self.output, "Available Packages:")?;
        self.print_packages(false)?;

        let Some(package) = self.prompt_package("\nChoose new package: ", "Invalid package!")?
        else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };

        let today = self.clock.today();
        let result = self
            .state
            .renew_membership(&member.id, &package, today)
            .map(|member| member.expiry);

        match result {
            Ok(expiry) => writeln!(self.output, "Membership renewed! New expiry: {}", expiry)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn record_payment(&mut self) -> Result<Flow, GymError> {
        self.print_header("RECORD PAYMENT")?;

        let member = match self.prompt_member("Enter Member ID who paid: ")? {
            None => return Ok(Flow::End(SessionEnd::InputClosed)),
            Some(None) => return Ok(Flow::Continue),
            Some(Some(member)) => member,
        };

        let Some(amount) = self.prompt("Enter amount paid: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };
        let amount = match parse_amount(&amount) {
            Ok(amount) => amount,
            Err(e) => {
                self.report_error(&e)?;
                writeln!(self.output, "Invalid amount!")?;
                return Ok(Flow::Continue);
            }
        };

        let Some(method) = self.prompt("Payment method (Cash/Card/UPI): ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };

        let today = self.clock.today();
        let result = self
            .state
            .record_payment(&member.id, amount, &method, today)
            .map(|payment| payment.amount);

        match result {
            Ok(amount) => writeln!(self.output, "Payment of Rs. {} recorded successfully!", amount)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn show_report(&mut self) -> Result<(), GymError> {
        self.print_header("GYM REPORT")?;

        let report: GymReport = self.state.generate_report(self.clock.today());

        writeln!(self.output, "Total Members        : {}", report.total_members)?;
        writeln!(self.output, "Active Members       : {}", report.active)?;
        writeln!(self.output, "Expired Members      : {}", report.expired)?;
        writeln!(self.output, "Total Revenue        : Rs. {}", report.total_revenue)?;

        if !report.package_distribution.is_empty() {
            writeln!(self.output, "\nPackage Distribution:")?;
            for (package, count) in &report.package_distribution {
                writeln!(self.output, "  {}: {} members", package, count)?;
            }
        }
        Ok(())
    }

    fn save_and_exit(&mut self) -> Result<Flow, GymError> {
        if let Err(e) = save_state(&self.files, &self.state) {
            tracing::warn!(error = %e, "save failed");
            writeln!(self.output, "{}", e)?;
            writeln!(self.output, "Data NOT saved! Fix the problem and try again.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n{:^width$}", "All data saved successfully!", width = RULE_WIDTH)?;
        writeln!(
            self.output,
            "{:^width$}",
            "Thank you for using Gym Management System!",
            width = RULE_WIDTH
        )?;
        Ok(Flow::End(SessionEnd::Saved))
    }

    fn exit_without_saving(&mut self) -> Result<Flow, GymError> {
        let Some(confirm) =
            self.prompt("Are you sure you want to exit without saving? (y/n): ")?
        else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };

        if confirm.eq_ignore_ascii_case("y") {
            writeln!(self.output, "\n{:^width$}", "Goodbye! Changes not saved.", width = RULE_WIDTH)?;
            return Ok(Flow::End(SessionEnd::Discarded));
        }
        Ok(Flow::Continue)
    }
}
