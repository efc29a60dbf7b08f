use bcrypt::{hash, verify};

const HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, anyhow::Error> {
    let hashed = hash(password, HASH_COST)
        .map_err(|e| anyhow::anyhow!("Password hashing error: {:?}", e))?;
    Ok(hashed)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, anyhow::Error> {
    match verify(password, hash) {
        Ok(is_valid) => Ok(is_valid),
        Err(e) => {
            log::warn!("Stored password hash could not be verified: {:?}", e);
            Ok(false)
        }
    }
}
