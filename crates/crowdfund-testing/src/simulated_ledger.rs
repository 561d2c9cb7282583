use {
    anchor_lang::{
        solana_program::system_program, AccountDeserialize, AccountSerialize, AnchorDeserialize,
        Discriminator,
    },
    async_trait::async_trait,
    crowdfund_client::{Ledger, LedgerError, LedgerResult},
    crowdfund_sdk::{instruction, AddressFinder, Campaign},
    solana_sdk::{
        account::Account, hash::Hash, instruction::CompiledInstruction, pubkey::Pubkey,
        rent::Rent, signature::Signature, transaction::Transaction,
    },
    std::{
        collections::{HashMap, HashSet},
        sync::{Arc, Mutex, MutexGuard},
    },
    tracing::debug,
};

/// Bytes the program allocates per campaign account
pub const CAMPAIGN_ACCOUNT_SPACE: usize = 9000;

/// In-memory cluster running the crowdfund program's rules.
///
/// Clones share state, so a test can keep a handle while a `CampaignRemote`
/// owns another. Transactions apply atomically: one failing instruction
/// leaves every account untouched.
#[derive(Clone)]
pub struct SimulatedLedger {
    state: Arc<Mutex<LedgerState>>,
}

struct LedgerState {
    address_finder: AddressFinder,
    accounts: HashMap<Pubkey, Account>,
    /// Creation order, which is also listing order
    order: Vec<Pubkey>,
    blockhash: Hash,
    processed: HashSet<Signature>,
    transaction_count: usize,
    fail_next_fetch: Option<String>,
    fail_next_send: Option<String>,
}

impl Default for SimulatedLedger {
    fn default() -> Self {
        Self::new(AddressFinder::default())
    }
}

impl SimulatedLedger {
    pub fn new(address_finder: AddressFinder) -> Self {
        Self {
            state: Arc::new(Mutex::new(LedgerState {
                address_finder,
                accounts: HashMap::new(),
                order: Vec::new(),
                blockhash: Hash::new_unique(),
                processed: HashSet::new(),
                transaction_count: 0,
                fail_next_fetch: None,
                fail_next_send: None,
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn program_id(&self) -> Pubkey {
        self.state().address_finder.program_id
    }

    pub fn airdrop(&self, to: &Pubkey, lamports: u64) {
        let mut state = self.state();
        let account = state.account_mut_or_insert(to);
        account.lamports += lamports;
    }

    pub fn balance(&self, address: &Pubkey) -> u64 {
        self.state()
            .accounts
            .get(address)
            .map(|account| account.lamports)
            .unwrap_or(0)
    }

    pub fn account(&self, address: &Pubkey) -> Option<Account> {
        self.state().accounts.get(address).cloned()
    }

    /// Decoded campaign at `address`, straight from ledger state
    pub fn campaign(&self, address: &Pubkey) -> Option<Campaign> {
        let account = self.account(address)?;
        Campaign::try_deserialize(&mut account.data.as_slice()).ok()
    }

    /// Put an arbitrary account on the ledger, e.g. a foreign layout
    pub fn insert_account(&self, address: Pubkey, account: Account) {
        let mut state = self.state();
        if state.accounts.insert(address, account).is_none() {
            state.order.push(address);
        }
    }

    /// Put raw `data` on the ledger as a program-owned account
    pub fn insert_program_account(&self, address: Pubkey, data: Vec<u8>) {
        let owner = self.program_id();
        self.insert_account(
            address,
            Account {
                lamports: Rent::default().minimum_balance(data.len()),
                data,
                owner,
                executable: false,
                rent_epoch: 0,
            },
        );
    }

    pub fn fail_next_fetch(&self, reason: &str) {
        self.state().fail_next_fetch = Some(reason.to_string());
    }

    pub fn fail_next_send(&self, reason: &str) {
        self.state().fail_next_send = Some(reason.to_string());
    }

    /// Successfully executed transactions so far
    pub fn transaction_count(&self) -> usize {
        self.state().transaction_count
    }
}

#[async_trait]
impl Ledger for SimulatedLedger {
    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
    ) -> LedgerResult<Vec<(Pubkey, Account)>> {
        let mut state = self.state();
        if let Some(reason) = state.fail_next_fetch.take() {
            return Err(LedgerError::Rejected(reason));
        }

        Ok(state
            .order
            .iter()
            .filter_map(|address| {
                let account = state.accounts.get(address)?;
                (account.owner == *program_id).then(|| (*address, account.clone()))
            })
            .collect())
    }

    async fn get_account(&self, address: &Pubkey) -> LedgerResult<Option<Account>> {
        let mut state = self.state();
        if let Some(reason) = state.fail_next_fetch.take() {
            return Err(LedgerError::Rejected(reason));
        }
        Ok(state.accounts.get(address).cloned())
    }

    async fn latest_blockhash(&self) -> LedgerResult<Hash> {
        Ok(self.state().blockhash)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> LedgerResult<Signature> {
        let mut state = self.state();
        if let Some(reason) = state.fail_next_send.take() {
            return Err(LedgerError::Rejected(reason));
        }
        state.process_transaction(transaction)
    }
}

impl LedgerState {
    fn account_mut_or_insert(&mut self, address: &Pubkey) -> &mut Account {
        if !self.accounts.contains_key(address) {
            self.order.push(*address);
        }
        self.accounts
            .entry(*address)
            .or_insert_with(|| Account::new(0, 0, &system_program::ID))
    }

    fn process_transaction(&mut self, transaction: &Transaction) -> LedgerResult<Signature> {
        if transaction.message.recent_blockhash != self.blockhash {
            return Err(LedgerError::Rejected("Blockhash not found".to_string()));
        }
        let required = transaction.message.header.num_required_signatures as usize;
        if required == 0 || transaction.signatures.len() != required {
            return Err(LedgerError::Rejected(
                "Transaction has the wrong number of signatures".to_string(),
            ));
        }
        transaction
            .verify()
            .map_err(|e| LedgerError::Rejected(format!("Signature verification failed: {e}")))?;

        let signature = transaction.signatures[0];
        if self.processed.contains(&signature) {
            return Err(LedgerError::Rejected(
                "This transaction has already been processed".to_string(),
            ));
        }

        // Work on a copy so a failing instruction rolls back the whole transaction
        let mut working = self.accounts.clone();
        let mut created = Vec::new();
        for (index, ix) in transaction.message.instructions.iter().enumerate() {
            self.execute(transaction, ix, &mut working, &mut created)
                .map_err(|e| {
                    LedgerError::Rejected(format!("Error processing Instruction {index}: {e}"))
                })?;
        }

        self.accounts = working;
        self.order.extend(created);
        self.processed.insert(signature);
        self.transaction_count += 1;
        self.blockhash = Hash::new_unique();

        debug!("Simulated transaction {} succeeded", signature);
        Ok(signature)
    }

    fn execute(
        &self,
        transaction: &Transaction,
        ix: &CompiledInstruction,
        accounts: &mut HashMap<Pubkey, Account>,
        created: &mut Vec<Pubkey>,
    ) -> Result<(), String> {
        let message = &transaction.message;
        let account_key = |index: usize| -> Result<Pubkey, String> {
            message
                .account_keys
                .get(index)
                .copied()
                .ok_or_else(|| "Account index out of bounds".to_string())
        };

        let program_id = account_key(ix.program_id_index as usize)?;
        if program_id != self.address_finder.program_id {
            return Err(format!("Unsupported program {program_id}"));
        }

        let key = |position: usize| -> Result<Pubkey, String> {
            let index = *ix.accounts.get(position).ok_or("Not enough account keys")? as usize;
            account_key(index)
        };
        let signer = |position: usize| -> Result<Pubkey, String> {
            let index = *ix.accounts.get(position).ok_or("Not enough account keys")? as usize;
            if !message.is_signer(index) {
                return Err("Missing required signature".to_string());
            }
            account_key(index)
        };

        if ix.data.len() < 8 {
            return Err("Instruction data too short for discriminator".to_string());
        }
        let (discriminator, args) = ix.data.split_at(8);

        if discriminator == instruction::Create::DISCRIMINATOR {
            let args = instruction::Create::try_from_slice(args).map_err(|e| e.to_string())?;
            let user = signer(1)?;
            self.create(accounts, created, key(0)?, user, args)
        } else if discriminator == instruction::Donate::DISCRIMINATOR {
            let args = instruction::Donate::try_from_slice(args).map_err(|e| e.to_string())?;
            let user = signer(1)?;
            self.donate(accounts, key(0)?, user, args.amount)
        } else if discriminator == instruction::Withdraw::DISCRIMINATOR {
            let args = instruction::Withdraw::try_from_slice(args).map_err(|e| e.to_string())?;
            let user = signer(1)?;
            self.withdraw(accounts, key(0)?, user, args.amount)
        } else {
            Err("Fallback functions are not supported".to_string())
        }
    }

    fn create(
        &self,
        accounts: &mut HashMap<Pubkey, Account>,
        created: &mut Vec<Pubkey>,
        campaign: Pubkey,
        user: Pubkey,
        args: instruction::Create,
    ) -> Result<(), String> {
        let (expected, _) = self.address_finder.find_campaign_address(&user);
        if campaign != expected {
            return Err("A seeds constraint was violated".to_string());
        }
        if accounts.contains_key(&campaign) {
            return Err(format!("Allocate: account {campaign} already in use"));
        }

        let rent = Rent::default().minimum_balance(CAMPAIGN_ACCOUNT_SPACE);
        debit(accounts, &user, rent)?;

        let mut account = Account::new(
            rent,
            CAMPAIGN_ACCOUNT_SPACE,
            &self.address_finder.program_id,
        );
        write_campaign(
            &mut account,
            &Campaign {
                admin: user,
                name: args.name,
                description: args.description,
                amount_donated: 0,
            },
        )?;
        accounts.insert(campaign, account);
        created.push(campaign);
        Ok(())
    }

    fn donate(
        &self,
        accounts: &mut HashMap<Pubkey, Account>,
        campaign: Pubkey,
        user: Pubkey,
        amount: u64,
    ) -> Result<(), String> {
        let mut record = self.load_campaign(accounts, &campaign)?;
        record.amount_donated = record
            .amount_donated
            .checked_add(amount)
            .ok_or("Arithmetic overflow")?;

        debit(accounts, &user, amount)?;
        let account = accounts.get_mut(&campaign).ok_or("Campaign vanished")?;
        account.lamports += amount;
        write_campaign(account, &record)
    }

    fn withdraw(
        &self,
        accounts: &mut HashMap<Pubkey, Account>,
        campaign: Pubkey,
        user: Pubkey,
        amount: u64,
    ) -> Result<(), String> {
        let mut record = self.load_campaign(accounts, &campaign)?;
        if record.admin != user {
            return Err("Unauthorized: only the campaign admin may withdraw".to_string());
        }
        record.amount_donated = record
            .amount_donated
            .checked_sub(amount)
            .ok_or("Insufficient donated amount")?;

        let account = accounts.get_mut(&campaign).ok_or("Campaign vanished")?;
        let rent = Rent::default().minimum_balance(account.data.len());
        if account.lamports.saturating_sub(rent) < amount {
            return Err("Insufficient funds".to_string());
        }
        account.lamports -= amount;
        write_campaign(account, &record)?;

        accounts
            .entry(user)
            .or_insert_with(|| Account::new(0, 0, &system_program::ID))
            .lamports += amount;
        Ok(())
    }

    fn load_campaign(
        &self,
        accounts: &HashMap<Pubkey, Account>,
        campaign: &Pubkey,
    ) -> Result<Campaign, String> {
        let account = accounts
            .get(campaign)
            .ok_or("The program expected this account to be already initialized")?;
        if account.owner != self.address_finder.program_id {
            return Err("The given account is owned by a different program".to_string());
        }
        Campaign::try_deserialize(&mut account.data.as_slice()).map_err(|e| e.to_string())
    }
}

fn debit(
    accounts: &mut HashMap<Pubkey, Account>,
    from: &Pubkey,
    lamports: u64,
) -> Result<(), String> {
    let account = accounts
        .get_mut(from)
        .ok_or("Attempt to debit an account but found no record of a prior credit")?;
    account.lamports = account
        .lamports
        .checked_sub(lamports)
        .ok_or("Transfer: insufficient lamports")?;
    Ok(())
}

fn write_campaign(account: &mut Account, campaign: &Campaign) -> Result<(), String> {
    let mut data = Vec::with_capacity(campaign.serialized_len());
    campaign.try_serialize(&mut data).map_err(|e| e.to_string())?;
    if data.len() > account.data.len() {
        return Err("Failed to serialize the account".to_string());
    }
    account.data[..data.len()].copy_from_slice(&data);
    Ok(())
}
