//! Special-purpose register numbers.
//!
//! The SPR address space has 1024 slots and is shared by every PowerPC
//! implementation; families reuse numbers freely, so two constants with the
//! same value belong to different register files, never to one model. The
//! section a constant sits in names the family that owns it.

/// Total number of SPR slots in the architecture.
pub const SPR_SLOTS: usize = 1024;

// User-visible base registers.

/// Multiply-quotient register (601 only).
pub const SPR_MQ: u16 = 0x000;
/// Integer exception register.
pub const SPR_XER: u16 = 0x001;
/// 601 user read of the RTC upper word.
pub const SPR_601_VRTCU: u16 = 0x004;
/// 601 user read of the RTC lower word.
pub const SPR_601_VRTCL: u16 = 0x005;
/// 601 user read of the decrementer.
pub const SPR_601_UDECR: u16 = 0x006;
/// Link register.
pub const SPR_LR: u16 = 0x008;
/// Count register.
pub const SPR_CTR: u16 = 0x009;
/// User view of the authority mask register.
pub const SPR_UAMR: u16 = 0x00D;
/// Data stream control register.
pub const SPR_DSCR: u16 = 0x011;

// Supervisor base registers.

/// Data storage interrupt status register.
pub const SPR_DSISR: u16 = 0x012;
/// Data address register.
pub const SPR_DAR: u16 = 0x013;
/// 601 supervisor write of the RTC upper word.
pub const SPR_601_RTCU: u16 = 0x014;
/// 601 supervisor write of the RTC lower word.
pub const SPR_601_RTCL: u16 = 0x015;
/// Decrementer.
pub const SPR_DECR: u16 = 0x016;
/// Storage description register (hashed page table base).
pub const SPR_SDR1: u16 = 0x019;
/// Save/restore register 0.
pub const SPR_SRR0: u16 = 0x01A;
/// Save/restore register 1.
pub const SPR_SRR1: u16 = 0x01B;
/// Come-from address register.
pub const SPR_CFAR: u16 = 0x01C;
/// Authority mask register.
pub const SPR_AMR: u16 = 0x01D;
/// Accelerator control register.
pub const SPR_ACOP: u16 = 0x01F;

// Book3S facility and transactional-memory registers.

/// Transaction failure handler address register.
pub const SPR_TFHAR: u16 = 0x080;
/// Transaction failure instruction address register.
pub const SPR_TFIAR: u16 = 0x081;
/// Transaction exception and summary register.
pub const SPR_TEXASR: u16 = 0x082;
/// Upper 32 bits of the transaction exception and summary register.
pub const SPR_TEXASRU: u16 = 0x083;
/// User read of the control register.
pub const SPR_UCTRL: u16 = 0x088;
/// Thread id register.
pub const SPR_TIDR: u16 = 0x090;
/// Control register.
pub const SPR_CTRL: u16 = 0x098;
/// Facility status and control register.
pub const SPR_FSCR: u16 = 0x099;
/// Problem-state priority boost register.
pub const SPR_PSPB: u16 = 0x09F;
/// Directed privileged doorbell exception state register.
pub const SPR_DPDES: u16 = 0x0B0;
/// Data address watchpoint register.
pub const SPR_DAWR: u16 = 0x0B4;
/// Relative priority register.
pub const SPR_RPR: u16 = 0x0BA;
/// Completed instruction address breakpoint register.
pub const SPR_CIABR: u16 = 0x0BB;
/// Data address watchpoint extension register.
pub const SPR_DAWRX: u16 = 0x0BC;
/// Hypervisor facility status and control register.
pub const SPR_HFSCR: u16 = 0x0BE;

// SPRG scratch and time-base registers.

/// Vector save/restore register (user).
pub const SPR_VRSAVE: u16 = 0x100;
/// User read of SPRG0 on embedded cores.
pub const SPR_USPRG0: u16 = 0x100;
/// User read of SPRG3.
pub const SPR_USPRG3: u16 = 0x103;
/// User read of SPRG4.
pub const SPR_USPRG4: u16 = 0x104;
/// User read of SPRG5.
pub const SPR_USPRG5: u16 = 0x105;
/// User read of SPRG6.
pub const SPR_USPRG6: u16 = 0x106;
/// User read of SPRG7.
pub const SPR_USPRG7: u16 = 0x107;
/// User read of the time base, lower word.
pub const SPR_VTBL: u16 = 0x10C;
/// User read of the time base, upper word.
pub const SPR_VTBU: u16 = 0x10D;
/// Software scratch register 0.
pub const SPR_SPRG0: u16 = 0x110;
/// Software scratch register 1.
pub const SPR_SPRG1: u16 = 0x111;
/// Software scratch register 2.
pub const SPR_SPRG2: u16 = 0x112;
/// Software scratch register 3.
pub const SPR_SPRG3: u16 = 0x113;
/// Software scratch register 4 (embedded).
pub const SPR_SPRG4: u16 = 0x114;
/// Software scratch register 5 (embedded).
pub const SPR_SPRG5: u16 = 0x115;
/// Software scratch register 6 (embedded).
pub const SPR_SPRG6: u16 = 0x116;
/// Software scratch register 7 (embedded).
pub const SPR_SPRG7: u16 = 0x117;
/// External access register.
pub const SPR_EAR: u16 = 0x11A;
/// Time base, lower word (supervisor write).
pub const SPR_TBL: u16 = 0x11C;
/// Time base, upper word (supervisor write).
pub const SPR_TBU: u16 = 0x11D;
/// Upper 40 bits of the time base (hypervisor write).
pub const SPR_TBU40: u16 = 0x11E;
/// Processor id register, embedded form.
pub const SPR_BOOKE_PIR: u16 = 0x11E;
/// Processor version register.
pub const SPR_PVR: u16 = 0x11F;

// Hypervisor state (Book3S).

/// Hypervisor scratch register 0.
pub const SPR_HSPRG0: u16 = 0x130;
/// Hypervisor scratch register 1.
pub const SPR_HSPRG1: u16 = 0x131;
/// Hypervisor data storage interrupt status register.
pub const SPR_HDSISR: u16 = 0x132;
/// Hypervisor data address register.
pub const SPR_HDAR: u16 = 0x133;
/// Scaled processor utilisation resource register.
pub const SPR_SPURR: u16 = 0x134;
/// Processor utilisation resource register.
pub const SPR_PURR: u16 = 0x135;
/// Hypervisor decrementer.
pub const SPR_HDEC: u16 = 0x136;
/// Hardware interrupt offset register.
pub const SPR_HIOR: u16 = 0x137;
/// Real mode offset register.
pub const SPR_RMOR: u16 = 0x138;
/// Hypervisor real mode offset register.
pub const SPR_HRMOR: u16 = 0x139;
/// Hypervisor save/restore register 0.
pub const SPR_HSRR0: u16 = 0x13A;
/// Hypervisor save/restore register 1.
pub const SPR_HSRR1: u16 = 0x13B;
/// Time facility management register.
pub const SPR_TFMR: u16 = 0x13D;
/// Logical partitioning control register.
pub const SPR_LPCR: u16 = 0x13E;
/// Logical partition id register.
pub const SPR_LPIDR: u16 = 0x13F;
/// Processor compatibility register.
pub const SPR_PCR: u16 = 0x152;
/// Instruction counter.
pub const SPR_IC: u16 = 0x15D;
/// Virtual time base.
pub const SPR_VTB: u16 = 0x15F;

// BookE interrupt, timer and MMU state.

/// Process id register.
pub const SPR_BOOKE_PID: u16 = 0x030;
/// Process id register, hashed-MMU form.
pub const SPR_BOOK3S_PID: u16 = 0x030;
/// Decrementer auto-reload register.
pub const SPR_BOOKE_DECAR: u16 = 0x036;
/// Critical save/restore register 0.
pub const SPR_BOOKE_CSRR0: u16 = 0x03A;
/// Critical save/restore register 1.
pub const SPR_BOOKE_CSRR1: u16 = 0x03B;
/// Data exception address register.
pub const SPR_BOOKE_DEAR: u16 = 0x03D;
/// Instruction authority mask register.
pub const SPR_IAMR: u16 = 0x03D;
/// Exception syndrome register.
pub const SPR_BOOKE_ESR: u16 = 0x03E;
/// Interrupt vector prefix register.
pub const SPR_BOOKE_IVPR: u16 = 0x03F;
/// Debug status register.
pub const SPR_BOOKE_DBSR: u16 = 0x130;
/// Debug control register 0.
pub const SPR_BOOKE_DBCR0: u16 = 0x134;
/// Debug control register 1.
pub const SPR_BOOKE_DBCR1: u16 = 0x135;
/// Debug control register 2.
pub const SPR_BOOKE_DBCR2: u16 = 0x136;
/// Embedded processor control register.
pub const SPR_BOOKE_EPCR: u16 = 0x133;
/// Instruction address compare 1.
pub const SPR_BOOKE_IAC1: u16 = 0x138;
/// Instruction address compare 2.
pub const SPR_BOOKE_IAC2: u16 = 0x139;
/// Instruction address compare 3.
pub const SPR_BOOKE_IAC3: u16 = 0x13A;
/// Instruction address compare 4.
pub const SPR_BOOKE_IAC4: u16 = 0x13B;
/// Data address compare 1.
pub const SPR_BOOKE_DAC1: u16 = 0x13C;
/// Data address compare 2.
pub const SPR_BOOKE_DAC2: u16 = 0x13D;
/// Data value compare 1.
pub const SPR_BOOKE_DVC1: u16 = 0x13E;
/// Data value compare 2.
pub const SPR_BOOKE_DVC2: u16 = 0x13F;
/// Timer status register.
pub const SPR_BOOKE_TSR: u16 = 0x150;
/// Timer control register.
pub const SPR_BOOKE_TCR: u16 = 0x154;
/// TLB 0 page-size register.
pub const SPR_BOOKE_TLB0PS: u16 = 0x158;
/// TLB 1 page-size register.
pub const SPR_BOOKE_TLB1PS: u16 = 0x159;
/// TLB 2 page-size register.
pub const SPR_BOOKE_TLB2PS: u16 = 0x15A;
/// TLB 3 page-size register.
pub const SPR_BOOKE_TLB3PS: u16 = 0x15B;
/// Combined MAS7 and MAS3 access.
pub const SPR_BOOKE_MAS7_MAS3: u16 = 0x174;
/// Interrupt vector offset register 0 (critical input).
pub const SPR_BOOKE_IVOR0: u16 = 0x190;
/// Interrupt vector offset register 1 (machine check).
pub const SPR_BOOKE_IVOR1: u16 = 0x191;
/// Interrupt vector offset register 2 (data storage).
pub const SPR_BOOKE_IVOR2: u16 = 0x192;
/// Interrupt vector offset register 3 (instruction storage).
pub const SPR_BOOKE_IVOR3: u16 = 0x193;
/// Interrupt vector offset register 4 (external input).
pub const SPR_BOOKE_IVOR4: u16 = 0x194;
/// Interrupt vector offset register 5 (alignment).
pub const SPR_BOOKE_IVOR5: u16 = 0x195;
/// Interrupt vector offset register 6 (program).
pub const SPR_BOOKE_IVOR6: u16 = 0x196;
/// Interrupt vector offset register 7 (floating-point unavailable).
pub const SPR_BOOKE_IVOR7: u16 = 0x197;
/// Interrupt vector offset register 8 (system call).
pub const SPR_BOOKE_IVOR8: u16 = 0x198;
/// Interrupt vector offset register 9 (auxiliary unavailable).
pub const SPR_BOOKE_IVOR9: u16 = 0x199;
/// Interrupt vector offset register 10 (decrementer).
pub const SPR_BOOKE_IVOR10: u16 = 0x19A;
/// Interrupt vector offset register 11 (fixed-interval timer).
pub const SPR_BOOKE_IVOR11: u16 = 0x19B;
/// Interrupt vector offset register 12 (watchdog).
pub const SPR_BOOKE_IVOR12: u16 = 0x19C;
/// Interrupt vector offset register 13 (data TLB miss).
pub const SPR_BOOKE_IVOR13: u16 = 0x19D;
/// Interrupt vector offset register 14 (instruction TLB miss).
pub const SPR_BOOKE_IVOR14: u16 = 0x19E;
/// Interrupt vector offset register 15 (debug).
pub const SPR_BOOKE_IVOR15: u16 = 0x19F;
/// Signal-processing engine status and control register.
pub const SPR_BOOKE_SPEFSCR: u16 = 0x200;
/// Interrupt vector offset register 32 (SPE unavailable).
pub const SPR_BOOKE_IVOR32: u16 = 0x210;
/// Interrupt vector offset register 33 (embedded FP data).
pub const SPR_BOOKE_IVOR33: u16 = 0x211;
/// Interrupt vector offset register 34 (embedded FP round).
pub const SPR_BOOKE_IVOR34: u16 = 0x212;
/// Interrupt vector offset register 35 (performance monitor).
pub const SPR_BOOKE_IVOR35: u16 = 0x213;
/// Interrupt vector offset register 36 (processor doorbell).
pub const SPR_BOOKE_IVOR36: u16 = 0x214;
/// Interrupt vector offset register 37 (critical doorbell).
pub const SPR_BOOKE_IVOR37: u16 = 0x215;
/// Interrupt vector offset register 38 (guest doorbell).
pub const SPR_BOOKE_IVOR38: u16 = 0x216;
/// Interrupt vector offset register 39 (guest critical doorbell).
pub const SPR_BOOKE_IVOR39: u16 = 0x217;
/// Interrupt vector offset register 40 (hypervisor system call).
pub const SPR_BOOKE_IVOR40: u16 = 0x218;
/// Interrupt vector offset register 41 (hypervisor privilege).
pub const SPR_BOOKE_IVOR41: u16 = 0x219;
/// Interrupt vector offset register 42 (LRAT error).
pub const SPR_BOOKE_IVOR42: u16 = 0x21A;
/// Machine check save/restore register 0.
pub const SPR_BOOKE_MCSRR0: u16 = 0x23A;
/// Machine check save/restore register 1.
pub const SPR_BOOKE_MCSRR1: u16 = 0x23B;
/// Machine check status register.
pub const SPR_BOOKE_MCSR: u16 = 0x23C;
/// Debug save/restore register 0.
pub const SPR_BOOKE_DSRR0: u16 = 0x23E;
/// Debug save/restore register 1.
pub const SPR_BOOKE_DSRR1: u16 = 0x23F;
/// Software scratch register 8.
pub const SPR_BOOKE_SPRG8: u16 = 0x25C;
/// Software scratch register 9.
pub const SPR_BOOKE_SPRG9: u16 = 0x25D;
/// MMU assist register 0.
pub const SPR_BOOKE_MAS0: u16 = 0x270;
/// MMU assist register 1.
pub const SPR_BOOKE_MAS1: u16 = 0x271;
/// MMU assist register 2.
pub const SPR_BOOKE_MAS2: u16 = 0x272;
/// MMU assist register 3.
pub const SPR_BOOKE_MAS3: u16 = 0x273;
/// MMU assist register 4.
pub const SPR_BOOKE_MAS4: u16 = 0x274;
/// MMU assist register 5.
pub const SPR_BOOKE_MAS5: u16 = 0x275;
/// MMU assist register 6.
pub const SPR_BOOKE_MAS6: u16 = 0x276;
/// MMU assist register 7.
pub const SPR_BOOKE_MAS7: u16 = 0x3B0;
/// Process id register 1.
pub const SPR_BOOKE_PID1: u16 = 0x279;
/// Process id register 2.
pub const SPR_BOOKE_PID2: u16 = 0x27A;
/// TLB 0 configuration register.
pub const SPR_BOOKE_TLB0CFG: u16 = 0x2B0;
/// TLB 1 configuration register.
pub const SPR_BOOKE_TLB1CFG: u16 = 0x2B1;
/// TLB 2 configuration register.
pub const SPR_BOOKE_TLB2CFG: u16 = 0x2B2;
/// TLB 3 configuration register.
pub const SPR_BOOKE_TLB3CFG: u16 = 0x2B3;
/// External proxy register.
pub const SPR_BOOKE_EPR: u16 = 0x2BE;
/// External PID load context.
pub const SPR_BOOKE_EPLC: u16 = 0x3B3;
/// External PID store context.
pub const SPR_BOOKE_EPSC: u16 = 0x3B4;
/// Debug data acquisition message register.
pub const SPR_BOOKE_DCDBTRL: u16 = 0x39C;
/// Data cache debug tag register, high word.
pub const SPR_BOOKE_DCDBTRH: u16 = 0x39D;
/// Instruction cache debug tag register, low word.
pub const SPR_BOOKE_ICDBTRL: u16 = 0x39E;
/// Instruction cache debug tag register, high word.
pub const SPR_BOOKE_ICDBTRH: u16 = 0x39F;
/// Instruction cache debug data register.
pub const SPR_BOOKE_ICDBDR: u16 = 0x3D3;

// e200/e500 core-specific registers.

/// Branch buffer entry address register.
pub const SPR_EXXX_BBEAR: u16 = 0x201;
/// Branch buffer target address register.
pub const SPR_EXXX_BBTAR: u16 = 0x202;
/// L1 cache configuration register 0.
pub const SPR_EXXX_L1CFG0: u16 = 0x203;
/// L1 cache configuration register 1.
pub const SPR_EXXX_L1CFG1: u16 = 0x204;
/// Nexus process id register.
pub const SPR_EXXX_NPIDR: u16 = 0x205;
/// Context control register (e200).
pub const SPR_EXXX_CTXCR: u16 = 0x230;
/// Debug control register 3 (e200).
pub const SPR_EXXX_DBCR3: u16 = 0x231;
/// Debug counter register (e200).
pub const SPR_EXXX_DBCNT: u16 = 0x232;
/// Alternate context control register (e200).
pub const SPR_EXXX_ALTCTXCR: u16 = 0x238;
/// Machine check address register.
pub const SPR_EXXX_MCAR: u16 = 0x23D;
/// Branch unit control and status register.
pub const SPR_EXXX_BUCSR: u16 = 0x3F5;
/// L1 cache control and status register 0.
pub const SPR_EXXX_L1CSR0: u16 = 0x3F2;
/// L1 cache control and status register 1.
pub const SPR_EXXX_L1CSR1: u16 = 0x3F3;
/// L1 cache flush and invalidate register 0.
pub const SPR_EXXX_L1FINV0: u16 = 0x3F8;
/// L2 cache control and status register 0.
pub const SPR_EXXX_L2CSR0: u16 = 0x3F9;
/// MMU configuration register.
pub const SPR_MMUCFG: u16 = 0x3F7;
/// MMU control and status register 0.
pub const SPR_MMUCSR0: u16 = 0x3F4;
/// Memory base address register.
pub const SPR_MBAR: u16 = 0x137;
/// Thread identification register.
pub const SPR_TIR: u16 = 0x1BE;
/// System version register.
pub const SPR_SVR: u16 = 0x3FF;

// 40x family.

/// Zone protection register.
pub const SPR_40X_ZPR: u16 = 0x3B0;
/// Process id register.
pub const SPR_40X_PID: u16 = 0x3B1;
/// Core configuration register 0.
pub const SPR_4XX_CCR0: u16 = 0x3B3;
/// Storage guarded register.
pub const SPR_40X_SGR: u16 = 0x3B9;
/// Data cache write-through register.
pub const SPR_40X_DCWR: u16 = 0x3BA;
/// Storage little-endian register.
pub const SPR_405_SLER: u16 = 0x3BB;
/// Storage user-defined 0 register.
pub const SPR_405_SU0R: u16 = 0x3BC;
/// Exception syndrome register.
pub const SPR_40X_ESR: u16 = 0x3D4;
/// Data exception address register.
pub const SPR_40X_DEAR: u16 = 0x3D5;
/// Exception vector prefix register.
pub const SPR_40X_EVPR: u16 = 0x3D6;
/// Core debug control register (403).
pub const SPR_403_CDBCR: u16 = 0x3D7;
/// Timer status register.
pub const SPR_40X_TSR: u16 = 0x3D8;
/// Timer control register.
pub const SPR_40X_TCR: u16 = 0x3DA;
/// Programmable interval timer.
pub const SPR_40X_PIT: u16 = 0x3DB;
/// Save/restore register 2.
pub const SPR_40X_SRR2: u16 = 0x3DE;
/// Save/restore register 3.
pub const SPR_40X_SRR3: u16 = 0x3DF;
/// Debug status register.
pub const SPR_40X_DBSR: u16 = 0x3F0;
/// Debug control register 0.
pub const SPR_40X_DBCR0: u16 = 0x3F2;
/// Debug control register 1 (405).
pub const SPR_405_DBCR1: u16 = 0x3F3;
/// Instruction address compare 1.
pub const SPR_40X_IAC1: u16 = 0x3F4;
/// Instruction address compare 2.
pub const SPR_40X_IAC2: u16 = 0x3F5;
/// Instruction address compare 3 (405).
pub const SPR_405_IAC3: u16 = 0x3B4;
/// Instruction address compare 4 (405).
pub const SPR_405_IAC4: u16 = 0x3B5;
/// Data address compare 1.
pub const SPR_40X_DAC1: u16 = 0x3F6;
/// Data address compare 2.
pub const SPR_40X_DAC2: u16 = 0x3F7;
/// Data value compare 1 (405).
pub const SPR_405_DVC1: u16 = 0x3B6;
/// Data value compare 2 (405).
pub const SPR_405_DVC2: u16 = 0x3B7;
/// Data cache cacheability register.
pub const SPR_40X_DCCR: u16 = 0x3FA;
/// Instruction cache cacheability register.
pub const SPR_40X_ICCR: u16 = 0x3FB;
/// Storage key register (401).
pub const SPR_401_SKR: u16 = 0x3BF;
/// Protection bound lower 1 (403).
pub const SPR_403_PBL1: u16 = 0x3FC;
/// Protection bound upper 1 (403).
pub const SPR_403_PBU1: u16 = 0x3FD;
/// Protection bound lower 2 (403).
pub const SPR_403_PBL2: u16 = 0x3FE;
/// Protection bound upper 2 (403).
pub const SPR_403_PBU2: u16 = 0x3FF;
/// Time base, lower word, 403 supervisor write.
pub const SPR_403_TBL: u16 = 0x3DD;
/// Time base, upper word, 403 supervisor write.
pub const SPR_403_TBU: u16 = 0x3DC;
/// Time base, lower word, 403 user read.
pub const SPR_403_VTBL: u16 = 0x3CD;
/// Time base, upper word, 403 user read.
pub const SPR_403_VTBU: u16 = 0x3CC;

// 440 family.

/// Instruction cache normal victim registers.
pub const SPR_440_INV0: u16 = 0x370;
/// Instruction cache normal victim register 1.
pub const SPR_440_INV1: u16 = 0x371;
/// Instruction cache normal victim register 2.
pub const SPR_440_INV2: u16 = 0x372;
/// Instruction cache normal victim register 3.
pub const SPR_440_INV3: u16 = 0x373;
/// Instruction cache transient victim register 0.
pub const SPR_440_ITV0: u16 = 0x374;
/// Instruction cache transient victim register 1.
pub const SPR_440_ITV1: u16 = 0x375;
/// Instruction cache transient victim register 2.
pub const SPR_440_ITV2: u16 = 0x376;
/// Instruction cache transient victim register 3.
pub const SPR_440_ITV3: u16 = 0x377;
/// Core configuration register 1.
pub const SPR_440_CCR1: u16 = 0x378;
/// Data cache normal victim register 0.
pub const SPR_440_DNV0: u16 = 0x390;
/// Data cache normal victim register 1.
pub const SPR_440_DNV1: u16 = 0x391;
/// Data cache normal victim register 2.
pub const SPR_440_DNV2: u16 = 0x392;
/// Data cache normal victim register 3.
pub const SPR_440_DNV3: u16 = 0x393;
/// Data cache transient victim register 0.
pub const SPR_440_DTV0: u16 = 0x394;
/// Data cache transient victim register 1.
pub const SPR_440_DTV1: u16 = 0x395;
/// Data cache transient victim register 2.
pub const SPR_440_DTV2: u16 = 0x396;
/// Data cache transient victim register 3.
pub const SPR_440_DTV3: u16 = 0x397;
/// Data cache victim limit register.
pub const SPR_440_DVLIM: u16 = 0x398;
/// Instruction cache victim limit register.
pub const SPR_440_IVLIM: u16 = 0x399;
/// Reset configuration register.
pub const SPR_440_RSTCFG: u16 = 0x39B;
/// Memory management unit control register.
pub const SPR_440_MMUCR: u16 = 0x3B2;
/// Debug data register.
pub const SPR_440_DBDR: u16 = 0x3F3;

// MPC5xx/8xx (RCPU) development-support registers.

/// External interrupt enable.
pub const SPR_MPC_EIE: u16 = 0x050;
/// External interrupt disable.
pub const SPR_MPC_EID: u16 = 0x051;
/// Non-recoverable interrupt.
pub const SPR_MPC_NRI: u16 = 0x052;
/// Comparator A value register.
pub const SPR_MPC_CMPA: u16 = 0x090;
/// Comparator B value register.
pub const SPR_MPC_CMPB: u16 = 0x091;
/// Comparator C value register.
pub const SPR_MPC_CMPC: u16 = 0x092;
/// Comparator D value register.
pub const SPR_MPC_CMPD: u16 = 0x093;
/// Exception cause register.
pub const SPR_MPC_ECR: u16 = 0x094;
/// Debug enable register.
pub const SPR_MPC_DER: u16 = 0x095;
/// Breakpoint counter A.
pub const SPR_MPC_COUNTA: u16 = 0x096;
/// Breakpoint counter B.
pub const SPR_MPC_COUNTB: u16 = 0x097;
/// Comparator E value register.
pub const SPR_MPC_CMPE: u16 = 0x098;
/// Comparator F value register.
pub const SPR_MPC_CMPF: u16 = 0x099;
/// Comparator G value register.
pub const SPR_MPC_CMPG: u16 = 0x09A;
/// Comparator H value register.
pub const SPR_MPC_CMPH: u16 = 0x09B;
/// Load/store support control register 1.
pub const SPR_MPC_LCTRL1: u16 = 0x09C;
/// Load/store support control register 2.
pub const SPR_MPC_LCTRL2: u16 = 0x09D;
/// Internal memory map register.
pub const SPR_MPC_IMMR: u16 = 0x27E;
/// Breakpoint address register.
pub const SPR_MPC_BAR: u16 = 0x09F;
/// Development port data register.
pub const SPR_MPC_DPDR: u16 = 0x2D3;
/// Instruction cache control and status register.
pub const SPR_MPC_IC_CST: u16 = 0x230;
/// Instruction cache address register.
pub const SPR_MPC_IC_ADR: u16 = 0x231;
/// Instruction cache data port register.
pub const SPR_MPC_IC_DAT: u16 = 0x232;
/// Data cache control and status register.
pub const SPR_MPC_DC_CST: u16 = 0x238;
/// Data cache address register.
pub const SPR_MPC_DC_ADR: u16 = 0x239;
/// Data cache data port register.
pub const SPR_MPC_DC_DAT: u16 = 0x23A;
/// Instruction MMU control register.
pub const SPR_MPC_MI_CTR: u16 = 0x310;
/// Instruction MMU access protection register.
pub const SPR_MPC_MI_AP: u16 = 0x312;
/// Instruction MMU effective page number register.
pub const SPR_MPC_MI_EPN: u16 = 0x313;
/// Instruction MMU tablewalk control register.
pub const SPR_MPC_MI_TWC: u16 = 0x315;
/// Instruction MMU real page number register.
pub const SPR_MPC_MI_RPN: u16 = 0x316;
/// Instruction MMU CAM debug register.
pub const SPR_MPC_MI_DBCAM: u16 = 0x330;
/// Instruction MMU RAM debug register 0.
pub const SPR_MPC_MI_DBRAM0: u16 = 0x331;
/// Instruction MMU RAM debug register 1.
pub const SPR_MPC_MI_DBRAM1: u16 = 0x332;
/// Data MMU control register.
pub const SPR_MPC_MD_CTR: u16 = 0x318;
/// Data MMU current address space id register.
pub const SPR_MPC_MD_CASID: u16 = 0x319;
/// Data MMU access protection register.
pub const SPR_MPC_MD_AP: u16 = 0x31A;
/// Data MMU effective page number register.
pub const SPR_MPC_MD_EPN: u16 = 0x31B;
/// Data MMU tablewalk base register.
pub const SPR_MPC_MD_TWB: u16 = 0x31C;
/// Data MMU tablewalk control register.
pub const SPR_MPC_MD_TWC: u16 = 0x31D;
/// Data MMU real page number register.
pub const SPR_MPC_MD_RPN: u16 = 0x31E;
/// Data MMU tablewalk special register.
pub const SPR_MPC_MD_TW: u16 = 0x31F;
/// Data MMU CAM debug register.
pub const SPR_MPC_MD_DBCAM: u16 = 0x338;
/// Data MMU RAM debug register 0.
pub const SPR_MPC_MD_DBRAM0: u16 = 0x339;
/// Data MMU RAM debug register 1.
pub const SPR_MPC_MD_DBRAM1: u16 = 0x33A;
/// Burst buffer configuration register (5xx).
pub const SPR_RCPU_BBCMCR: u16 = 0x221;
/// Floating-point exception cause register (5xx).
pub const SPR_RCPU_FPECR: u16 = 0x3FE;
/// Instruction MMU global region attribute register (5xx).
pub const SPR_RCPU_MI_GRA: u16 = 0x308;
/// Instruction MMU region address register 0 (5xx).
pub const SPR_RCPU_MI_RA0: u16 = 0x300;
/// Instruction MMU region address register 1 (5xx).
pub const SPR_RCPU_MI_RA1: u16 = 0x301;
/// Instruction MMU region address register 2 (5xx).
pub const SPR_RCPU_MI_RA2: u16 = 0x302;
/// Instruction MMU region address register 3 (5xx).
pub const SPR_RCPU_MI_RA3: u16 = 0x303;
/// Instruction MMU region base address register 0 (5xx).
pub const SPR_RCPU_MI_RBA0: u16 = 0x304;
/// Instruction MMU region base address register 1 (5xx).
pub const SPR_RCPU_MI_RBA1: u16 = 0x305;
/// Instruction MMU region base address register 2 (5xx).
pub const SPR_RCPU_MI_RBA2: u16 = 0x306;
/// Instruction MMU region base address register 3 (5xx).
pub const SPR_RCPU_MI_RBA3: u16 = 0x307;
/// L2U global region attribute register (5xx).
pub const SPR_RCPU_L2U_GRA: u16 = 0x328;
/// L2U machine control register (5xx).
pub const SPR_RCPU_L2U_MCR: u16 = 0x329;
/// L2U region address register 0 (5xx).
pub const SPR_RCPU_L2U_RA0: u16 = 0x320;
/// L2U region address register 1 (5xx).
pub const SPR_RCPU_L2U_RA1: u16 = 0x321;
/// L2U region address register 2 (5xx).
pub const SPR_RCPU_L2U_RA2: u16 = 0x322;
/// L2U region address register 3 (5xx).
pub const SPR_RCPU_L2U_RA3: u16 = 0x323;
/// L2U region base address register 0 (5xx).
pub const SPR_RCPU_L2U_RBA0: u16 = 0x324;
/// L2U region base address register 1 (5xx).
pub const SPR_RCPU_L2U_RBA1: u16 = 0x325;
/// L2U region base address register 2 (5xx).
pub const SPR_RCPU_L2U_RBA2: u16 = 0x326;
/// L2U region base address register 3 (5xx).
pub const SPR_RCPU_L2U_RBA3: u16 = 0x327;

// Block address translation registers.

/// Instruction BAT 0, upper word.
pub const SPR_IBAT0U: u16 = 0x210;
/// Instruction BAT 0, lower word.
pub const SPR_IBAT0L: u16 = 0x211;
/// Instruction BAT 1, upper word.
pub const SPR_IBAT1U: u16 = 0x212;
/// Instruction BAT 1, lower word.
pub const SPR_IBAT1L: u16 = 0x213;
/// Instruction BAT 2, upper word.
pub const SPR_IBAT2U: u16 = 0x214;
/// Instruction BAT 2, lower word.
pub const SPR_IBAT2L: u16 = 0x215;
/// Instruction BAT 3, upper word.
pub const SPR_IBAT3U: u16 = 0x216;
/// Instruction BAT 3, lower word.
pub const SPR_IBAT3L: u16 = 0x217;
/// Data BAT 0, upper word.
pub const SPR_DBAT0U: u16 = 0x218;
/// Data BAT 0, lower word.
pub const SPR_DBAT0L: u16 = 0x219;
/// Data BAT 1, upper word.
pub const SPR_DBAT1U: u16 = 0x21A;
/// Data BAT 1, lower word.
pub const SPR_DBAT1L: u16 = 0x21B;
/// Data BAT 2, upper word.
pub const SPR_DBAT2U: u16 = 0x21C;
/// Data BAT 2, lower word.
pub const SPR_DBAT2L: u16 = 0x21D;
/// Data BAT 3, upper word.
pub const SPR_DBAT3U: u16 = 0x21E;
/// Data BAT 3, lower word.
pub const SPR_DBAT3L: u16 = 0x21F;
/// Data BAT 4, upper word.
pub const SPR_DBAT4U: u16 = 0x238;
/// Data BAT 4, lower word.
pub const SPR_DBAT4L: u16 = 0x239;
/// Data BAT 5, upper word.
pub const SPR_DBAT5U: u16 = 0x23A;
/// Data BAT 5, lower word.
pub const SPR_DBAT5L: u16 = 0x23B;
/// Data BAT 6, upper word.
pub const SPR_DBAT6U: u16 = 0x23C;
/// Data BAT 6, lower word.
pub const SPR_DBAT6L: u16 = 0x23D;
/// Data BAT 7, upper word.
pub const SPR_DBAT7U: u16 = 0x23E;
/// Data BAT 7, lower word.
pub const SPR_DBAT7L: u16 = 0x23F;
/// Instruction BAT 4, upper word.
pub const SPR_IBAT4U: u16 = 0x230;
/// Instruction BAT 4, lower word.
pub const SPR_IBAT4L: u16 = 0x231;
/// Instruction BAT 5, upper word.
pub const SPR_IBAT5U: u16 = 0x232;
/// Instruction BAT 5, lower word.
pub const SPR_IBAT5L: u16 = 0x233;
/// Instruction BAT 6, upper word.
pub const SPR_IBAT6U: u16 = 0x234;
/// Instruction BAT 6, lower word.
pub const SPR_IBAT6L: u16 = 0x235;
/// Instruction BAT 7, upper word.
pub const SPR_IBAT7U: u16 = 0x236;
/// Instruction BAT 7, lower word.
pub const SPR_IBAT7L: u16 = 0x237;

// Classic 6xx/7xx software TLB and hardware implementation registers.

/// Data TLB miss address register.
pub const SPR_DMISS: u16 = 0x3D0;
/// Data TLB miss compare register.
pub const SPR_DCMP: u16 = 0x3D1;
/// Primary hash address register.
pub const SPR_HASH1: u16 = 0x3D2;
/// Secondary hash address register.
pub const SPR_HASH2: u16 = 0x3D3;
/// Instruction TLB miss address register.
pub const SPR_IMISS: u16 = 0x3D4;
/// Instruction TLB miss compare register.
pub const SPR_ICMP: u16 = 0x3D5;
/// Required physical address register.
pub const SPR_RPA: u16 = 0x3D6;
/// TLB miss register (74xx).
pub const SPR_TLBMISS: u16 = 0x3D4;
/// Page table entry, high word (74xx).
pub const SPR_PTEHI: u16 = 0x3D5;
/// Page table entry, low word (74xx).
pub const SPR_PTELO: u16 = 0x3D6;
/// Hardware implementation register 0.
pub const SPR_HID0: u16 = 0x3F0;
/// Hardware implementation register 1.
pub const SPR_HID1: u16 = 0x3F1;
/// Hardware implementation register 2 (G2/e300/755).
pub const SPR_HID2: u16 = 0x3F3;
/// Instruction address breakpoint register.
pub const SPR_IABR: u16 = 0x3F2;
/// Instruction address breakpoint register 2 (e300/755).
pub const SPR_IABR2: u16 = 0x3FA;
/// Instruction breakpoint control register (755).
pub const SPR_IBCR: u16 = 0x3F4;
/// Data breakpoint control register (755).
pub const SPR_DBCR: u16 = 0x3F5;
/// Data address breakpoint register.
pub const SPR_DABR: u16 = 0x3F5;
/// Data address breakpoint register 2 (e300).
pub const SPR_DABR2: u16 = 0x3F6;
/// Data address breakpoint extension register.
pub const SPR_DABRX: u16 = 0x3F7;
/// L2 cache control register.
pub const SPR_L2CR: u16 = 0x3F9;
/// L2 performance monitor control register (755).
pub const SPR_L2PMCR: u16 = 0x3D9;
/// L3 cache control register (7450 line).
pub const SPR_L3CR: u16 = 0x3FA;
/// L3 cache input timing control register 0.
pub const SPR_L3ITCR0: u16 = 0x3D8;
/// L3 cache input timing control register 1 (7457).
pub const SPR_L3ITCR1: u16 = 0x3D1;
/// L3 cache input timing control register 2 (7457).
pub const SPR_L3ITCR2: u16 = 0x3D2;
/// L3 cache input timing control register 3 (7457).
pub const SPR_L3ITCR3: u16 = 0x3D3;
/// L3 cache output hold control register (7457).
pub const SPR_L3OHCR: u16 = 0x3D0;
/// L3 private memory register (7445 line).
pub const SPR_L3PM: u16 = 0x3DB;
/// Instruction cache throttling control register.
pub const SPR_ICTC: u16 = 0x3FB;
/// Instruction cache control register (74xx).
pub const SPR_ICTRL: u16 = 0x3F3;
/// Load/store control register (74xx).
pub const SPR_LDSTCR: u16 = 0x3F8;
/// Load/store debug register (750cl).
pub const SPR_LDSTDB: u16 = 0x3F4;
/// Memory subsystem control register 0 (74xx).
pub const SPR_MSSCR0: u16 = 0x3F6;
/// Memory subsystem control register 1 (74xx).
pub const SPR_MSSCR1: u16 = 0x3F7;
/// Memory subsystem status register 0 (74xx).
pub const SPR_MSSSR0: u16 = 0x3F7;
/// Processor id register (classic).
pub const SPR_PIR: u16 = 0x3FF;
/// Breakpoint address mask register (74xx).
pub const SPR_BAMR: u16 = 0x3B7;
/// User read of the breakpoint address mask register.
pub const SPR_UBAMR: u16 = 0x3A7;
/// Thermal management register 1.
pub const SPR_THRM1: u16 = 0x3FC;
/// Thermal management register 2.
pub const SPR_THRM2: u16 = 0x3FD;
/// Thermal management register 3.
pub const SPR_THRM3: u16 = 0x3FE;
/// Thermal management register 4 (750cl).
pub const SPR_750_THRM4: u16 = 0x3A5;
/// Thermal diode calibration, low (750cl).
pub const SPR_750_TDCL: u16 = 0x3A6;
/// Thermal diode calibration, high (750cl).
pub const SPR_750_TDCH: u16 = 0x3A4;
/// Graphics quantization register 0 (750cl).
pub const SPR_750_GQR0: u16 = 0x390;
/// Graphics quantization register 1 (750cl).
pub const SPR_750_GQR1: u16 = 0x391;
/// Graphics quantization register 2 (750cl).
pub const SPR_750_GQR2: u16 = 0x392;
/// Graphics quantization register 3 (750cl).
pub const SPR_750_GQR3: u16 = 0x393;
/// Graphics quantization register 4 (750cl).
pub const SPR_750_GQR4: u16 = 0x394;
/// Graphics quantization register 5 (750cl).
pub const SPR_750_GQR5: u16 = 0x395;
/// Graphics quantization register 6 (750cl).
pub const SPR_750_GQR6: u16 = 0x396;
/// Graphics quantization register 7 (750cl).
pub const SPR_750_GQR7: u16 = 0x397;
/// Hardware implementation register 2 (750cl).
pub const SPR_750CL_HID2: u16 = 0x398;
/// Hardware implementation register 4 (750cl).
pub const SPR_750CL_HID4: u16 = 0x3F3;
/// Hardware implementation register 2 (750fx).
pub const SPR_750FX_HID2: u16 = 0x3F8;
/// Write pipe address register (750cl).
pub const SPR_750_WPAR: u16 = 0x399;
/// DMA upper register (750cl).
pub const SPR_750_DMAU: u16 = 0x39A;
/// DMA lower register (750cl).
pub const SPR_750_DMAL: u16 = 0x39B;

// 601 implementation registers.

/// Hardware implementation register 2 (601 checkstop sources).
pub const SPR_601_HID2: u16 = 0x3F2;
/// Hardware implementation register 5 (601 debug).
pub const SPR_601_HID5: u16 = 0x3F5;
/// Hardware implementation register 15 (601 PIR mirror).
pub const SPR_601_HID15: u16 = 0x3FF;

// 602 implementation registers.

/// Timer control register (602).
pub const SPR_TCR: u16 = 0x3DA;
/// System exception register (602).
pub const SPR_SER: u16 = 0x3DB;
/// System exception base register (602).
pub const SPR_SEBR: u16 = 0x3DC;
/// ESA save/restore register (602).
pub const SPR_ESASRR: u16 = 0x3DD;
/// Interrupt base register (602).
pub const SPR_IBR: u16 = 0x3DE;
/// Stack pointer shadow (602).
pub const SPR_SP: u16 = 0x3FD;
/// Link register shadow (602).
pub const SPR_LT: u16 = 0x3FE;

// 6xx/7xx performance monitor.

/// Monitor mode control register 0.
pub const SPR_7XX_MMCR0: u16 = 0x3B8;
/// Performance monitor counter 1.
pub const SPR_7XX_PMC1: u16 = 0x3B9;
/// Performance monitor counter 2.
pub const SPR_7XX_PMC2: u16 = 0x3BA;
/// Sampled instruction address register.
pub const SPR_7XX_SIAR: u16 = 0x3BB;
/// Monitor mode control register 1.
pub const SPR_7XX_MMCR1: u16 = 0x3BC;
/// Performance monitor counter 3.
pub const SPR_7XX_PMC3: u16 = 0x3BD;
/// Performance monitor counter 4.
pub const SPR_7XX_PMC4: u16 = 0x3BE;
/// Performance monitor counter 5 (74xx).
pub const SPR_7XX_PMC5: u16 = 0x3B1;
/// Performance monitor counter 6 (74xx).
pub const SPR_7XX_PMC6: u16 = 0x3B2;
/// Sampled data address register.
pub const SPR_SDA: u16 = 0x3BF;
/// User read of MMCR0.
pub const SPR_7XX_UMMCR0: u16 = 0x3A8;
/// User read of PMC1.
pub const SPR_7XX_UPMC1: u16 = 0x3A9;
/// User read of PMC2.
pub const SPR_7XX_UPMC2: u16 = 0x3AA;
/// User read of SIAR.
pub const SPR_7XX_USIAR: u16 = 0x3AB;
/// User read of MMCR1.
pub const SPR_7XX_UMMCR1: u16 = 0x3AC;
/// User read of PMC3.
pub const SPR_7XX_UPMC3: u16 = 0x3AD;
/// User read of PMC4.
pub const SPR_7XX_UPMC4: u16 = 0x3AE;
/// User read of PMC5 (74xx).
pub const SPR_7XX_UPMC5: u16 = 0x3A1;
/// User read of PMC6 (74xx).
pub const SPR_7XX_UPMC6: u16 = 0x3A2;
/// Monitor mode control register 2 (74xx).
pub const SPR_74XX_MMCR2: u16 = 0x3B0;
/// User read of MMCR2 (74xx).
pub const SPR_74XX_UMMCR2: u16 = 0x3A0;

// Book3S performance monitor.

/// User read of the sampled instruction event register.
pub const SPR_POWER_USIER: u16 = 0x300;
/// User read of MMCR2.
pub const SPR_POWER_UMMCR2: u16 = 0x301;
/// User read of MMCRA.
pub const SPR_POWER_UMMCRA: u16 = 0x302;
/// User read of PMC1.
pub const SPR_POWER_UPMC1: u16 = 0x303;
/// User read of PMC2.
pub const SPR_POWER_UPMC2: u16 = 0x304;
/// User read of PMC3.
pub const SPR_POWER_UPMC3: u16 = 0x305;
/// User read of PMC4.
pub const SPR_POWER_UPMC4: u16 = 0x306;
/// User read of PMC5.
pub const SPR_POWER_UPMC5: u16 = 0x307;
/// User read of PMC6.
pub const SPR_POWER_UPMC6: u16 = 0x308;
/// User read of PMC7 (970).
pub const SPR_970_UPMC7: u16 = 0x309;
/// User read of PMC8 (970).
pub const SPR_970_UPMC8: u16 = 0x30A;
/// User read of MMCR0.
pub const SPR_POWER_UMMCR0: u16 = 0x30B;
/// User read of SIAR.
pub const SPR_POWER_USIAR: u16 = 0x30C;
/// User read of SDAR.
pub const SPR_POWER_USDAR: u16 = 0x30D;
/// User read of MMCR1.
pub const SPR_POWER_UMMCR1: u16 = 0x30E;
/// Sampled instruction event register.
pub const SPR_POWER_SIER: u16 = 0x310;
/// Monitor mode control register 2.
pub const SPR_POWER_MMCR2: u16 = 0x311;
/// Monitor mode control register A.
pub const SPR_POWER_MMCRA: u16 = 0x312;
/// Performance monitor counter 1.
pub const SPR_POWER_PMC1: u16 = 0x313;
/// Performance monitor counter 2.
pub const SPR_POWER_PMC2: u16 = 0x314;
/// Performance monitor counter 3.
pub const SPR_POWER_PMC3: u16 = 0x315;
/// Performance monitor counter 4.
pub const SPR_POWER_PMC4: u16 = 0x316;
/// Performance monitor counter 5.
pub const SPR_POWER_PMC5: u16 = 0x317;
/// Performance monitor counter 6.
pub const SPR_POWER_PMC6: u16 = 0x318;
/// Performance monitor counter 7 (970).
pub const SPR_970_PMC7: u16 = 0x319;
/// Performance monitor counter 8 (970).
pub const SPR_970_PMC8: u16 = 0x31A;
/// Monitor mode control register 0.
pub const SPR_POWER_MMCR0: u16 = 0x31B;
/// Sampled instruction address register.
pub const SPR_POWER_SIAR: u16 = 0x31C;
/// Sampled data address register.
pub const SPR_POWER_SDAR: u16 = 0x31D;
/// Monitor mode control register 1.
pub const SPR_POWER_MMCR1: u16 = 0x31E;
/// Supervisor performance monitor counter 1.
pub const SPR_POWER_SPMC1: u16 = 0x338;
/// Supervisor performance monitor counter 2.
pub const SPR_POWER_SPMC2: u16 = 0x339;
/// Monitor mode control register S.
pub const SPR_POWER_MMCRS: u16 = 0x354;
/// Monitor mode control register C.
pub const SPR_MMCRC: u16 = 0x355;
/// Monitor mode control register H.
pub const SPR_MMCRH: u16 = 0x356;

// Book3S event-based branching and miscellaneous facilities.

/// Branch event status and control, set form.
pub const SPR_BESCRS: u16 = 0x320;
/// Branch event status and control, set upper form.
pub const SPR_BESCRSU: u16 = 0x321;
/// Branch event status and control, reset form.
pub const SPR_BESCRR: u16 = 0x322;
/// Branch event status and control, reset upper form.
pub const SPR_BESCRRU: u16 = 0x323;
/// Event-based branch handler register.
pub const SPR_EBBHR: u16 = 0x324;
/// Event-based branch return register.
pub const SPR_EBBRR: u16 = 0x325;
/// Branch event status and control register.
pub const SPR_BESCR: u16 = 0x326;
/// Target address register.
pub const SPR_TAR: u16 = 0x32F;
/// Access segment descriptor register (POWER9).
pub const SPR_ASDR: u16 = 0x330;
/// Program priority register.
pub const SPR_PPR: u16 = 0x380;
/// Processor stop status and control register.
pub const SPR_PSSCR: u16 = 0x357;
/// Partition table control register.
pub const SPR_PTCR: u16 = 0x1D0;
/// Hypervisor maintenance exception register.
pub const SPR_HMER: u16 = 0x350;
/// Hypervisor maintenance exception enable register.
pub const SPR_HMEER: u16 = 0x351;
/// Authority mask override register.
pub const SPR_AMOR: u16 = 0x35D;
/// User authority mask override register.
pub const SPR_UAMOR: u16 = 0x9D;
/// Trace control register (POWER8).
pub const SPR_TSCR: u16 = 0x399;
/// Thread switch control register (970).
pub const SPR_TACR: u16 = 0x378;
/// Thread switch timeout register (970).
pub const SPR_TCSCR: u16 = 0x379;
/// Control signature register (970).
pub const SPR_CSIGR: u16 = 0x37A;
/// Forward progress timeout register (970).
pub const SPR_ACCESSES: u16 = 0x37B;
/// Workload optimization register, thread.
pub const SPR_WORT: u16 = 0x37F;
/// Special purpose register C (POWER8 scratch interface).
pub const SPR_SPRC: u16 = 0x114;
/// Special purpose register D (POWER8 scratch interface).
pub const SPR_SPRD: u16 = 0x115;

// 970 and classic hardware implementation extensions.

/// Hardware implementation register 4 (970).
pub const SPR_970_HID4: u16 = 0x3F4;
/// Hardware implementation register 5 (970).
pub const SPR_970_HID5: u16 = 0x3F6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_stay_in_the_address_space() {
        for spr in [SPR_XER, SPR_PVR, SPR_SVR, SPR_BOOKE_MAS7, SPR_601_HID15] {
            assert!(usize::from(spr) < SPR_SLOTS);
        }
    }

    #[test]
    fn user_mirrors_sit_sixteen_below_their_source() {
        assert_eq!(SPR_7XX_UMMCR0 + 0x10, SPR_7XX_MMCR0);
        assert_eq!(SPR_POWER_UMMCR0 + 0x10, SPR_POWER_MMCR0);
        assert_eq!(SPR_POWER_UPMC1 + 0x10, SPR_POWER_PMC1);
        assert_eq!(SPR_970_UPMC7 + 0x10, SPR_970_PMC7);
        assert_eq!(SPR_USPRG4 + 0x10, SPR_SPRG4);
    }

    #[test]
    fn ivor_blocks_are_contiguous() {
        assert_eq!(SPR_BOOKE_IVOR15 - SPR_BOOKE_IVOR0, 15);
        assert_eq!(SPR_BOOKE_IVOR42 - SPR_BOOKE_IVOR32, 10);
    }
}
