use rv32sc_core::Simulator;
use rv32sc_core::config::Config;
use rv32sc_core::core::datapath::CycleOutputs;
use tracing_subscriber::EnvFilter;

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let config = Config::default();
        let sim = Simulator::new(&config).expect("default config must build a simulator");

        Self { sim }
    }

    /// Load a sequence of 32-bit instructions into memory at `addr` and set the PC.
    pub fn load_program(mut self, addr: u32, instructions: &[u32]) -> Self {
        self.sim.datapath.ram.load_words(addr, instructions);
        self.sim.pc = addr;
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.sim.datapath.gpr.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.datapath.gpr.read(reg)
    }

    /// Read the memory word containing the byte address `addr`.
    pub fn read_word(&self, addr: u32) -> u32 {
        self.sim.datapath.ram.read(addr >> 2)
    }

    /// Write a full memory word at the byte address `addr`.
    pub fn write_word(&mut self, addr: u32, val: u32) {
        self.sim.datapath.ram.write(addr >> 2, val, 0b1111);
    }

    /// Advance the simulator by one cycle and return its outputs.
    pub fn step(&mut self) -> CycleOutputs {
        self.sim.tick()
    }

    /// Run the simulator for a specific number of cycles.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            let _ = self.sim.tick();
        }
    }
}
