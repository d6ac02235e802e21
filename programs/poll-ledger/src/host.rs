//! Record I/O against runtime accounts.
//!
//! Accounts that may legitimately be empty (a poll id nobody created, a voter
//! who never voted) are taken as `UncheckedAccount` with a seeds constraint, and
//! read here so the engine can report a typed "not found" instead of a generic
//! deserialization failure.

use anchor_lang::{
    prelude::*,
    system_program::{self, Allocate, Assign, CreateAccount, Transfer},
    AccountDeserialize, AccountSerialize, Owner,
};

/// True when a record is already stored at this address.
pub fn is_occupied(info: &AccountInfo) -> bool {
    !info.data_is_empty() || info.owner != &System::id()
}

/// Reads the record at `info`, or `None` if nothing was ever created there.
pub fn load<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Result<Option<T>> {
    if info.data_is_empty() {
        return Ok(None);
    }
    if info.owner != &T::owner() {
        return Err(anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram.into());
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map(Some)
}

/// Writes a loaded record back. `None` means the record was never loaded and is
/// left untouched.
pub fn persist<T: AccountSerialize>(info: &AccountInfo, record: Option<&T>) -> Result<()> {
    let Some(record) = record else {
        return Ok(());
    };
    let mut data = info.try_borrow_mut_data()?;
    let mut cursor: &mut [u8] = &mut data[..];
    record.try_serialize(&mut cursor)
}

/// Allocates `space` bytes owned by this program at the PDA `target`, paid by
/// `payer`. Handles addresses that were pre-funded with lamports.
pub fn create<'info>(
    payer: &Signer<'info>,
    target: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    signer_seeds: &[&[u8]],
    space: usize,
) -> Result<()> {
    let rent = Rent::get()?.minimum_balance(space);
    let program = system_program.to_account_info();
    let seeds = [signer_seeds];

    if target.lamports() == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                program,
                CreateAccount {
                    from: payer.to_account_info(),
                    to: target.clone(),
                },
                &seeds,
            ),
            rent,
            space as u64,
            &crate::ID,
        );
    }

    let shortfall = rent.saturating_sub(target.lamports());
    if shortfall > 0 {
        system_program::transfer(
            CpiContext::new(
                program.clone(),
                Transfer {
                    from: payer.to_account_info(),
                    to: target.clone(),
                },
            ),
            shortfall,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            &seeds,
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            program,
            Assign {
                account_to_assign: target.clone(),
            },
            &seeds,
        ),
        &crate::ID,
    )
}
