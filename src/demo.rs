use qubits::{
    error::QuResult,
    gate::{ Apply, Gate },
    register::Register,
};
use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt };

fn main() -> QuResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let h = Gate::hadamard(2)?;
    let c = Gate::cnot();
    let p = Gate::pauli_y(2)?;

    let ch = c.apply(&h)?;
    let pch = p.apply(&ch)?;
    println!("{}", h);
    println!("{}", ch);
    println!("{}", pch);

    let reg = pch.apply(&Register::new(2)?)?;
    println!("state:");
    println!("{}", reg);
    println!("observed: {}", reg.observe());
    Ok(())
}
